//! Fixed prompt templates sent to the chat-completion backend.

use crate::models::CopyType;

pub const PRODUCT_ANALYST_SYSTEM: &str = "You are a product information analyst who extracts structured product data from web page text. Reply with JSON only, no extra commentary.";
pub const COPYWRITER_SYSTEM: &str = "You are a professional e-commerce copywriter. Reply with JSON only, no extra commentary.";
pub const MARKET_ANALYST_SYSTEM: &str = "You are a professional market analyst. Reply with JSON only, no extra commentary.";

pub fn product_analysis(page_text: &str) -> String {
    format!(
        r#"Analyze the following web page content, extract the product information and return it as JSON.

Page content:
{page_text}

Return this format (JSON only, nothing else):
{{
  "name": "product name",
  "description": "short product description (under 50 words)",
  "category": "product category",
  "price": price as a number or null,
  "attributes": {{
    "color": ["color 1", "color 2"],
    "size": ["size 1"],
    "material": "material",
    "usage": ["use 1", "use 2"]
  }}
}}"#
    )
}

pub fn copy(copy_type: CopyType, name: &str, description: &str) -> String {
    let (task, requirements, content_hint) = match copy_type {
        CopyType::Seo => (
            "an SEO-optimized product copy",
            "1. The title includes the main keyword, 60 characters max\n2. The content weaves keywords in naturally, 150-200 words\n3. Provide 5-8 related keywords",
            "content",
        ),
        CopyType::Ecommerce => (
            "an e-commerce sales copy",
            "1. An eye-catching title stressing a deal or feature\n2. Content includes a feature list, offer details and a call to action\n3. Use fitting emoji\n4. 200-300 words",
            "content (emoji and \\n line breaks allowed)",
        ),
        CopyType::Emotional => (
            "an emotional, story-driven copy",
            "1. Tell it as a story\n2. Create an emotional connection\n3. Avoid hard selling\n4. 200-300 words",
            "story content",
        ),
        CopyType::ShortTitle => (
            "a short product title",
            "1. Title of 20-30 characters\n2. Punchy and concise\n3. Includes the core selling point",
            "one-sentence description (under 30 characters)",
        ),
        CopyType::ShopeeSpec => (
            "a Shopee-style listing copy",
            "1. Title under 60 characters including specifications\n2. Content includes full specifications and a selling-point list\n3. Use the usual Shopee layout (✓ bullets, clear sections)",
            "specifications + selling points",
        ),
    };

    format!(
        r#"Write {task} for the following product:

Product name: {name}
Product description: {description}

Requirements:
{requirements}

Return JSON (JSON only, nothing else):
{{
  "title": "title",
  "content": "{content_hint}",
  "keywords": ["keyword 1", "keyword 2"]
}}"#
    )
}

pub fn audience(name: &str, description: &str) -> String {
    format!(
        r#"Analyze the target audience of the following product:

Product name: {name}
Product description: {description}

Return a detailed audience analysis as JSON (JSON only, nothing else):
{{
  "product_name": "{name}",
  "suggested_audiences": [
    {{
      "name": "audience name",
      "description": "description",
      "size": "small/medium/large",
      "relevance_score": 95,
      "suggested_platforms": ["instagram", "facebook"]
    }}
  ],
  "demographics": {{
    "age_range": ["18-24", "25-34"],
    "gender": ["female 60%", "male 40%"],
    "interests": ["interest 1", "interest 2"],
    "behaviors": ["behavior 1", "behavior 2"]
  }},
  "keywords": ["keyword 1", "keyword 2"],
  "target_markets": ["Taiwan", "Hong Kong"]
}}

Suggest 3-5 audience segments. Platforms must be one of: shopee, momo, pchome, facebook, instagram."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_copy_type_has_its_own_template() {
        let prompts: Vec<String> = CopyType::ALL.iter().map(|t| copy(*t, "Desk Lamp", "Warm light")).collect();
        for (i, a) in prompts.iter().enumerate() {
            assert!(a.contains("Product name: Desk Lamp"));
            assert!(a.contains("Product description: Warm light"));
            for b in &prompts[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn analysis_prompt_embeds_page_text() {
        let prompt = product_analysis("Stainless bottle 500ml");
        assert!(prompt.contains("Stainless bottle 500ml"));
        assert!(prompt.contains("\"attributes\": {"));
    }

    #[test]
    fn audience_prompt_names_product() {
        assert!(audience("Yoga Mat", "").contains("\"product_name\": \"Yoga Mat\""));
    }
}
