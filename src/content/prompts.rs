use crate::content::quota::is_aggressive;

/// Target platform for a generated script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Instagram,
    Youtube,
}

impl Platform {
    /// Expects input that is already trimmed and lowercased.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "instagram" => Some(Platform::Instagram),
            "youtube" => Some(Platform::Youtube),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::Youtube => "youtube",
        }
    }
}

const INSTAGRAM_INSTRUCTIONS: &str = "\
Create content optimized for Instagram Reels.
Make it emotional and highly engaging.
Add a catchy caption.
Add 10 viral hashtags.";

const YOUTUBE_INSTRUCTIONS: &str = "\
Create content optimized for YouTube Shorts.
Focus heavily on retention.
Add an SEO optimized title.
Add a keyword-rich description.";

const AGGRESSIVE_INSTRUCTIONS: &str = "\
Make the hook extremely bold and controversial.
Use psychological triggers.
Create a strong curiosity gap.
Increase emotional intensity.";

const OUTPUT_FORMAT: &str = "\
Respond in this EXACT format:

🎬 HOOK (0-3 sec attention grabber):
(1 very strong curiosity-based line)

🧠 BODY:
(4-6 short punchy lines, Hindi + simple English mix, high retention)

🔥 CTA:
(Encourage follow / subscribe / comment)

📸 INSTAGRAM CAPTION:
(2-3 engaging lines)

#️⃣ INSTAGRAM HASHTAGS:
(8-12 relevant hashtags)

▶ YOUTUBE TITLE:
(SEO optimized clickable title under 60 characters)

📝 YOUTUBE DESCRIPTION:
(2-3 line short description with keywords)

Make it emotional, engaging and scroll-stopping.
Keep sentences short.
Add curiosity gap in hook.";

pub fn platform_instructions(platform: Platform) -> &'static str {
    match platform {
        Platform::Instagram => INSTAGRAM_INSTRUCTIONS,
        Platform::Youtube => YOUTUBE_INSTRUCTIONS,
    }
}

/// Extra intensity directives, empty unless the style asks for aggression.
pub fn style_instructions(style: &str) -> &'static str {
    if is_aggressive(style) {
        AGGRESSIVE_INSTRUCTIONS
    } else {
        ""
    }
}

pub fn build_prompt(topic: &str, niche: &str, style: &str, platform: Platform) -> String {
    format!(
        "You are an elite viral short-form content strategist.\n\n\
         {platform_block}\n\
         {style_block}\n\n\
         {OUTPUT_FORMAT}\n\n\
         Topic: {topic}\n\
         Niche: {niche}\n\
         Style: {style}\n",
        platform_block = platform_instructions(platform),
        style_block = style_instructions(style),
    )
}
