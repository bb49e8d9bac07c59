//! Deterministic placeholder content.
//!
//! Used when no provider credential is configured and whenever an AI-backed
//! operation fails. Everything here is a pure function of its arguments.

use crate::models::{
    AdText, AudienceProfile, AudienceSegment, AudienceSize, CopyText, CopyType, Demographics,
    Platform, ProductInfo, SceneScript, ScriptTemplate, VideoStyle,
};

pub const PLACEHOLDER_PRODUCT_NAME: &str = "Product name (please edit manually)";
pub const PLACEHOLDER_PRODUCT_DESCRIPTION: &str = "Product description";
pub const PLACEHOLDER_PRODUCT_CATEGORY: &str = "Uncategorized";

/// Name fragments that select the camera/selfie audience profile.
pub const CAMERA_KEYWORDS: [&str; 5] = ["selfie", "self-portrait", "camera", "自拍", "相機"];

pub const DEFAULT_AD_PRICE: f64 = 990.0;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Stand-in for a URL analysis that could not be performed.
pub fn placeholder_product() -> ProductInfo {
    ProductInfo {
        name: PLACEHOLDER_PRODUCT_NAME.to_string(),
        description: Some(PLACEHOLDER_PRODUCT_DESCRIPTION.to_string()),
        category: Some(PLACEHOLDER_PRODUCT_CATEGORY.to_string()),
        ..ProductInfo::default()
    }
}

pub fn mock_copy(copy_type: CopyType) -> CopyText {
    match copy_type {
        CopyType::Seo => CopyText {
            title: "[2024 New] Bluetooth Selfie Stick | Pro Selfie Gear | Wireless Remote | Ships Today".to_string(),
            content: "This selfie stick is the best travel companion for your photos! Made of aerospace-grade aluminum alloy, it is light to carry yet built to last. The built-in Bluetooth 5.0 remote works from 10 meters away and supports both iOS and Android. A 360° rotating ball head lets you catch every perfect angle, and the 20-100cm telescopic design fits any shot. Great for travel, parties, live streams and vlogs.".to_string(),
            keywords: strings(&["selfie stick", "bluetooth selfie stick", "travel essentials", "live streaming gear", "vlog equipment"]),
        },
        CopyType::Ecommerce => CopyText {
            title: "Flash Sale! Pro Bluetooth Selfie Stick - Travel & Streaming Essential".to_string(),
            content: "\n🔥 Limited-time deal! Was $990, now only $599!\n\n✨ Five highlights:\n• Bluetooth 5.0 remote, 10m range\n• 360° rotating head for any angle\n• Extends from 20 to 100cm\n• Aerospace-grade aluminum, light and sturdy\n• Works with iOS and Android\n\n📦 In the box:\n✓ Selfie stick x1\n✓ Bluetooth remote x1\n✓ USB charging cable x1\n✓ Carry pouch x1\n\n🚚 In stock, ships within 24 hours\n🛡️ One-year warranty, 7-day return window\n\nOrder now and start shooting!\n".to_string(),
            keywords: strings(&["flash sale", "in stock", "fast shipping"]),
        },
        CopyType::Emotional => CopyText {
            title: "Every beautiful moment starts here".to_string(),
            content: "\nRemember the last trip, wanting a panorama but with nobody around to take it?\nRemember the get-togethers where someone always had to stay behind the camera?\n\nWith this smart selfie stick, no precious moment slips away.\n\nA quiet beach at dawn, just you and the waves. One tap on the remote, and the calm is yours to keep.\nA mountaintop at sunset, your friends all smiling. Stretch it out and fit the whole sky in the frame.\n\nIt is not just a selfie stick.\nIt is your personal photographer,\nyour most reliable travel partner,\na little wand that keeps every good moment of your life.\n\nBecause life happens once, and every moment deserves to be kept perfectly.\n".to_string(),
            keywords: strings(&["travel memories", "good times", "precious moments"]),
        },
        CopyType::ShortTitle => CopyText {
            title: "Bluetooth Selfie Stick | Remote | 360° Rotation | Travel Must-Have".to_string(),
            content: "Pro selfie gear for perfect photos, effortlessly".to_string(),
            keywords: strings(&["short", "precise"]),
        },
        CopyType::ShopeeSpec => CopyText {
            title: "[In Stock] Pro Bluetooth Selfie Stick, Remote, Telescopic, 360° Rotation, Lightweight".to_string(),
            content: "\n[Specifications]\n・Material: aerospace-grade aluminum alloy\n・Colors: black / white / pink\n・Length: 20-100cm\n・Weight: 180g\n・Connection: Bluetooth 5.0\n・Remote range: 10 meters\n・Battery: CR2032 (remote)\n・Compatibility: iOS 5.0+ / Android 4.3+\n・Warranty: one year\n\n[Selling points]\n✓ Bluetooth remote, hands free\n✓ 360° ball head, any angle\n✓ Lightweight, only 180g\n✓ Firm grip, fits large phones\n✓ Non-slip handle, comfortable hold\n✓ Local stock, fast shipping\n".to_string(),
            keywords: strings(&["specifications", "selling points", "shopee format"]),
        },
    }
}

pub fn is_camera_product(name: &str) -> bool {
    let name = name.to_lowercase();
    CAMERA_KEYWORDS.iter().any(|k| name.contains(k))
}

pub fn mock_audience(product_name: &str) -> AudienceProfile {
    if is_camera_product(product_name) {
        return camera_audience(product_name);
    }

    AudienceProfile {
        product_name: product_name.to_string(),
        suggested_audiences: vec![AudienceSegment {
            name: "General consumers".to_string(),
            description: "The general public interested in this product".to_string(),
            size: AudienceSize::Large,
            relevance_score: 70,
            suggested_platforms: vec![Platform::Facebook, Platform::Shopee],
        }],
        demographics: Demographics {
            age_range: strings(&["18-65"]),
            gender: strings(&["any"]),
            interests: strings(&["household goods", "online shopping"]),
            behaviors: strings(&["online shopping"]),
        },
        keywords: vec![product_name.to_string()],
        target_markets: strings(&["Taiwan"]),
    }
}

fn segment(name: &str, description: &str, size: AudienceSize, score: u8, platforms: [Platform; 2]) -> AudienceSegment {
    AudienceSegment {
        name: name.to_string(),
        description: description.to_string(),
        size,
        relevance_score: score,
        suggested_platforms: platforms.to_vec(),
    }
}

fn camera_audience(product_name: &str) -> AudienceProfile {
    AudienceProfile {
        product_name: product_name.to_string(),
        suggested_audiences: vec![
            segment("Travel enthusiasts", "People who travel often and love documenting their trips", AudienceSize::Large, 95, [Platform::Instagram, Platform::Facebook]),
            segment("Social content creators", "YouTubers, bloggers and Instagram influencers", AudienceSize::Medium, 90, [Platform::Instagram, Platform::Facebook]),
            segment("Photography hobbyists", "People who enjoy taking photos and follow camera gear", AudienceSize::Medium, 85, [Platform::Facebook, Platform::Instagram]),
            segment("Young women", "Women aged 18-35 who like selfies and sharing their lives", AudienceSize::Large, 88, [Platform::Instagram, Platform::Shopee]),
            segment("Live streamers", "Streamers who need a steady shooting setup", AudienceSize::Small, 80, [Platform::Facebook, Platform::Shopee]),
        ],
        demographics: Demographics {
            age_range: strings(&["18-24", "25-34", "35-44"]),
            gender: strings(&["female 65%", "male 35%"]),
            interests: strings(&["travel", "photography", "social media", "fashion", "food", "vlogging", "lifestyle"]),
            behaviors: strings(&[
                "uses Instagram frequently",
                "shops online often",
                "likes sharing photos",
                "follows KOLs and influencers",
                "engages in online communities",
            ]),
        },
        keywords: strings(&["selfie", "travel", "photography", "vlog", "influencer", "check-in", "IG", "live stream", "social", "life logging"]),
        target_markets: strings(&["Taiwan", "Hong Kong", "Singapore", "Malaysia"]),
    }
}

fn scene(number: u32, duration: u32, description: &str, voiceover: &str, camera_angle: &str, props: &[&str]) -> SceneScript {
    SceneScript {
        scene_number: number,
        duration,
        description: description.to_string(),
        voiceover: voiceover.to_string(),
        camera_angle: camera_angle.to_string(),
        props: strings(props),
    }
}

pub fn mock_script(style: VideoStyle) -> ScriptTemplate {
    match style {
        VideoStyle::SalesTalk => ScriptTemplate {
            script: "Hi everyone! Today I'm showing you this super handy selfie stick...".to_string(),
            scenes: vec![
                scene(1, 3, "Opening - host holding the product", "Hi everyone! Today I'm showing you this super handy selfie stick", "front medium shot", &["selfie stick"]),
                scene(2, 4, "Feature demo - extending it", "It goes from 20 to 100 centimeters, so convenient!", "close-up", &["selfie stick"]),
                scene(3, 4, "In use - selfie demo", "Bluetooth remote, perfect photos with one tap", "side wide shot", &["selfie stick", "phone"]),
                scene(4, 4, "Closing CTA", "Limited-time offer! Tap the link to buy now", "front close-up", &["product box"]),
            ],
            transitions: strings(&["fade in", "quick cut", "push in", "fade out"]),
            camera_angles: strings(&["front medium shot", "close-up", "side wide shot", "front close-up"]),
            music_style: "Upbeat, lively background music".to_string(),
            cta: "Buy now and get the limited-time discount!".to_string(),
        },
        VideoStyle::ProductDisplay => ScriptTemplate {
            script: "360° product showcase with on-screen captions".to_string(),
            scenes: vec![
                scene(1, 3, "Product front close-up", "", "front close-up", &["selfie stick"]),
                scene(2, 3, "360° rotating showcase", "", "orbit shot", &["selfie stick"]),
                scene(3, 3, "Detail shots", "", "macro close-up", &["selfie stick details"]),
                scene(4, 3, "Packaging", "", "top-down", &["product box"]),
                scene(5, 3, "CTA frame", "", "front", &["product + caption"]),
            ],
            transitions: strings(&["dissolve", "push-pull", "spin", "zoom", "fade out"]),
            camera_angles: strings(&["front close-up", "orbit", "macro", "top-down", "front"]),
            music_style: "Elegant instrumental background music".to_string(),
            cta: "Shop now".to_string(),
        },
        VideoStyle::StoryTelling => ScriptTemplate {
            script: "A story of how the product makes life better".to_string(),
            scenes: vec![
                scene(1, 3, "The problem - struggling to take photos", "Can never get the whole view in your travel photos?", "point of view", &["scene props"]),
                scene(2, 3, "The solution appears", "With this, problem solved", "product close-up", &["selfie stick"]),
                scene(3, 4, "In use - good times", "Capture every beautiful moment with ease", "wide scene", &["people", "selfie stick", "scenery"]),
                scene(4, 3, "The result", "Perfect photos, precious memories", "photo close-up", &["printed photos"]),
                scene(5, 2, "CTA", "Start your photo journey today", "product + caption", &["product", "CTA caption"]),
            ],
            transitions: strings(&["fade in", "dissolve", "quick cut", "slow motion", "fade out"]),
            camera_angles: strings(&["point of view", "close-up", "wide", "photo close-up", "product close-up"]),
            music_style: "Warm, moving soundtrack".to_string(),
            cta: "Limited-time offer, get yours now".to_string(),
        },
    }
}

pub const AD_TEMPLATE_COUNT: usize = 5;

/// The `index`-th ad template (cycling) filled in for `product`.
pub fn ad_template(product: &ProductInfo, index: usize) -> AdText {
    let name = &product.name;
    let price = product.price.unwrap_or(DEFAULT_AD_PRICE);
    match index % AD_TEMPLATE_COUNT {
        0 => AdText {
            headline: format!("Flash Sale! {name}"),
            primary_text: format!("🔥 A great deal is here! {name} is on sale for a limited time!\n\n✨ Why choose us?\n• Guaranteed quality\n• Fast shipping\n• Full after-sales support\n\nOrder now before it's gone!"),
            description: "Limited-time deal".to_string(),
            call_to_action: "Buy Now".to_string(),
        },
        1 => AdText {
            headline: format!("{name} - Your Best Choice"),
            primary_text: format!(
                "Still on the fence? Don't miss this life-changing find!\n\n{}\n\n💝 Free gift with every order\n📦 Nationwide delivery, arrives fast\n🛡️ Quality guaranteed, shop with confidence",
                product.description_or_empty()
            ),
            description: "Quality you can trust".to_string(),
            call_to_action: "Learn More".to_string(),
        },
        2 => AdText {
            headline: format!("Best Seller - {name}"),
            primary_text: "🌟 Why is everyone buying it?\n\nBecause it really works!\nOver 10,000 customers gave it five stars\n\nJoin them and enjoy it too!".to_string(),
            description: "Loved by 10,000 customers".to_string(),
            call_to_action: "Shop Now".to_string(),
        },
        3 => AdText {
            headline: format!("New Arrival | {name}"),
            primary_text: format!("🎉 Big launch!\n\n{name} is officially here\nEarly-bird pricing starts now\n\n✓ Limited supply\n✓ Free gift with the first batch\n✓ Extra discount over the threshold\n\nGrab it before it's gone!"),
            description: "Launch offer, limited quantity".to_string(),
            call_to_action: "Get It First".to_string(),
        },
        _ => AdText {
            headline: format!("{name} | On Sale Now"),
            primary_text: format!(
                "💰 Money-saving tip!\n\nWas ${}, now only ${}!\nSave $400, what a deal!\n\n🎁 Bonus offers:\n• Buy two, get one free\n• Free shipping over $1000\n• Extra member discount\n\nThe countdown is on!",
                format_price(price + 400.0),
                format_price(price)
            ),
            description: "Great value, buy now".to_string(),
            call_to_action: "Buy Now".to_string(),
        },
    }
}

/// Whole prices print without a fractional part.
pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{}", price as i64)
    } else {
        format!("{:.2}", price)
    }
}
