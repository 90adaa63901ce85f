//! Template-based prediction and advice text.
//!
//! Templates use `{sign}` and `{number}` placeholders. Selection is fully
//! determined by the sign and the life path number.

use crate::domain::ZodiacSign;

pub const PREDICTION_TEMPLATES: [&str; 5] = [
    "As a {sign} with a Life Path number of {number}, you're currently in a phase where the cosmic energies are aligning to bring significant changes in your personal relationships. The positioning of Venus suggests new connections or deepening of existing bonds. Trust your intuition when meeting new people in the coming months.",
    "Your {sign} nature combined with your Life Path {number} indicates that you're entering a period of self-discovery and spiritual growth. The recent planetary movements suggest that you should focus on inner healing and reflection. Journal your thoughts and pay attention to recurring dreams as they contain important messages.",
    "With the sun transiting through your house of career, and as a {sign} with Life Path {number}, you're likely to encounter new opportunities for professional advancement. Your natural talents will be recognized by someone in a position of authority. Stay prepared and don't hesitate to showcase your unique abilities.",
    "The cosmic alignment for {sign} individuals with Life Path {number} suggests that financial matters will require your attention soon. A careful review of your resources and spending patterns will reveal opportunities for growth and stability. Consider seeking advice from a trusted mentor in financial matters.",
    "Your creative energy is at an all-time high as Mars energizes your expression sector. As a {sign} with Life Path {number}, you have a unique perspective that others find fascinating. Don't hold back from sharing your ideas, as they could lead to unexpected opportunities for collaboration and growth.",
];

pub const ADVICE_TEMPLATES: [&str; 5] = [
    "Embrace your natural {sign} leadership qualities and combine them with the organizational strength of your Life Path {number}. This week, focus on structuring your goals into actionable steps rather than getting overwhelmed by the big picture.",
    "Your {sign} intuition is heightened right now, and with your Life Path {number}, you're particularly attuned to underlying patterns. Take time for meditation and reflection before making important decisions in the next few weeks.",
    "As a {sign} with Life Path {number}, your communication style is both persuasive and thoughtful. Use this gift to bridge understanding in a challenging relationship. Express your needs clearly but also make space to truly listen to others' perspectives.",
    "The current planetary alignment suggests that {sign} individuals with your Life Path {number} should focus on physical well-being. Incorporate more movement into your daily routine and pay attention to what your body needs in terms of rest and nourishment.",
    "With Mercury retrograde affecting your sector of learning, this is an excellent time for a {sign} with Life Path {number} to revisit unfinished creative projects or studies. Your perspective has evolved, and you'll find new significance in what you previously set aside.",
];

fn fill(template: &str, sign: ZodiacSign, life_path: u32) -> String {
    template
        .replace("{sign}", sign.label())
        .replace("{number}", &life_path.to_string())
}

pub fn prediction(sign: ZodiacSign, life_path: u32) -> String {
    let index = life_path as usize % PREDICTION_TEMPLATES.len();
    fill(PREDICTION_TEMPLATES[index], sign, life_path)
}

/// Advice is offset by the length of the sign's label.
pub fn advice(sign: ZodiacSign, life_path: u32) -> String {
    let index = (life_path as usize + sign.label().len()) % ADVICE_TEMPLATES.len();
    fill(ADVICE_TEMPLATES[index], sign, life_path)
}
