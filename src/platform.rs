//! Reshapes generated copy for the listing rules of each marketplace.

use crate::export;
use crate::models::{GeneratedCopy, Platform, PlatformContent, ProductInfo};

pub const SHOPEE_DEFAULT_STOCK: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformRules {
    pub title_max_chars: usize,
    pub image_width: u32,
    pub image_height: u32,
}

pub fn rules(platform: Platform) -> PlatformRules {
    let (title_max_chars, image_width, image_height) = match platform {
        Platform::Shopee => (60, 1200, 1200),
        Platform::Momo => (50, 800, 800),
        Platform::Pchome => (45, 1000, 1000),
        Platform::Facebook => (40, 1200, 630),
        Platform::Instagram => (30, 1080, 1080),
    };
    PlatformRules { title_max_chars, image_width, image_height }
}

pub fn convert_to_platform(product: &ProductInfo, copy: &GeneratedCopy, platform: Platform) -> PlatformContent {
    let title: String = copy.title.chars().take(rules(platform).title_max_chars).collect();
    let images = product.images.clone().unwrap_or_default();

    match platform {
        Platform::Shopee => {
            let specifications = vec![
                format!("Product: {}", product.name),
                format!("Material: {}", material(product)),
                format!("Colors: {}", colors(product, ", ").unwrap_or_else(|| "Multiple colors available".to_string())),
                "Origin: Taiwan".to_string(),
                "Warranty: one year".to_string(),
            ];
            let selling_points: Vec<String> = [
                "✓ Local stock, fast shipping",
                "✓ Quality guaranteed, buy with confidence",
                "✓ Dedicated support after purchase",
                "✓ 7-day return window",
                "✓ Free shipping over the threshold",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect();
            let csv_data = export::shopee_csv(&export::ShopeeRow {
                title: &title,
                description: &copy.content,
                specifications: &specifications,
                selling_points: &selling_points,
                price: product.price.unwrap_or(0.0),
                stock: SHOPEE_DEFAULT_STOCK,
            });
            PlatformContent {
                platform,
                title,
                description: copy.content.clone(),
                specifications,
                selling_points,
                images,
                csv_data: Some(csv_data),
            }
        }
        Platform::Momo => {
            let specifications = vec![
                format!("Product name | {}", product.name),
                format!("Material | {}", material(product)),
                format!("Colors | {}", colors(product, ", ").unwrap_or_else(|| "Multiple colors".to_string())),
                "Warranty | one year".to_string(),
                "Origin | Taiwan".to_string(),
            ];
            PlatformContent {
                platform,
                title,
                description: momo_sections(&copy.content),
                specifications,
                selling_points: Vec::new(),
                images,
                csv_data: None,
            }
        }
        _ => PlatformContent {
            platform,
            title,
            description: copy.content.clone(),
            specifications: Vec::new(),
            selling_points: Vec::new(),
            images,
            csv_data: None,
        },
    }
}

fn material(product: &ProductInfo) -> String {
    product
        .attributes
        .as_ref()
        .and_then(|a| a.material.clone())
        .unwrap_or_else(|| "Quality materials".to_string())
}

fn colors(product: &ProductInfo, separator: &str) -> Option<String> {
    product
        .attributes
        .as_ref()
        .and_then(|a| a.color.as_ref())
        .filter(|c| !c.is_empty())
        .map(|c| c.join(separator))
}

/// Momo wants the description split into labelled sections.
fn momo_sections(description: &str) -> String {
    description
        .split("\n\n")
        .enumerate()
        .map(|(i, section)| format!("[Section {}]\n{}", i + 1, section))
        .collect::<Vec<_>>()
        .join("\n\n")
}
