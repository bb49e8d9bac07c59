//! Plain-text and CSV renderings of generated content.

use std::fmt::Write;

use crate::catalog::format_price;
use crate::models::{GeneratedCopy, VideoScript};

fn quote(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}

fn csv_row<S: AsRef<str>>(cells: &[S]) -> String {
    cells.iter().map(|c| quote(c.as_ref())).collect::<Vec<_>>().join(",")
}

/// Copies as CSV for bulk listing, one row per copy.
pub fn copies_to_csv(copies: &[GeneratedCopy]) -> String {
    let mut lines = vec!["Product,Copy type,Title,Content,Keywords".to_string()];
    for copy in copies {
        lines.push(csv_row(&[
            copy.product_id.clone().unwrap_or_default(),
            copy.copy_type.as_str().to_string(),
            copy.title.clone(),
            copy.content.replace('\n', " "),
            copy.keywords.join(", "),
        ]));
    }
    lines.join("\n")
}

pub struct ShopeeRow<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub specifications: &'a [String],
    pub selling_points: &'a [String],
    pub price: f64,
    pub stock: u32,
}

pub fn shopee_csv(row: &ShopeeRow<'_>) -> String {
    let header = "Product name,Description,Specifications,Selling points,Price,Stock,Image 1,Image 2,Image 3";
    let cells = [
        row.title.to_string(),
        row.description.to_string(),
        row.specifications.join(" | "),
        row.selling_points.join(" | "),
        format_price(row.price),
        row.stock.to_string(),
        String::new(),
        String::new(),
        String::new(),
    ];
    format!("{}\n{}", header, csv_row(&cells))
}

/// Shot list for a video script: scenes, transitions and CTA.
pub fn shooting_list(script: &VideoScript) -> String {
    let style = serde_json::to_value(script.style)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default();

    let mut out = String::new();
    let _ = writeln!(out, "[{} shooting list]\n", style);
    let _ = writeln!(out, "Total duration: {} seconds", script.duration);
    let _ = writeln!(out, "Music: {}\n", script.music_style);

    out.push_str("[Storyboard]\n");
    for scene in &script.scenes {
        let _ = writeln!(out, "\nScene {} ({}s)", scene.scene_number, scene.duration);
        let _ = writeln!(out, "Shot: {}", scene.description);
        let _ = writeln!(out, "Camera: {}", scene.camera_angle);
        if !scene.voiceover.is_empty() {
            let _ = writeln!(out, "Voiceover: {}", scene.voiceover);
        }
        if !scene.props.is_empty() {
            let _ = writeln!(out, "Props: {}", scene.props.join(", "));
        }
    }

    out.push_str("\n[Transitions]\n");
    for (i, transition) in script.transitions.iter().enumerate() {
        let _ = writeln!(out, "Scene {} -> Scene {}: {}", i + 1, i + 2, transition);
    }

    let _ = writeln!(out, "\n[CTA]\n{}", script.cta);
    out
}
