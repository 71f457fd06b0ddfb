use rand::seq::IndexedRandom;
use shared::models::CharacterContext;

/// Generic endearment substituted for the {name} placeholder.
const ENDEARMENT: &str = "sweetie";

const HUMOR_SUFFIX: &str = " 😄";
const EMPATHY_SUFFIX: &str = " I hope that helps! 💕";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PersonalityCategory {
    Playful,
    Intellectual,
    Caring,
    Adventurous,
    Sweet,
}

/// Keyword sets checked in priority order; the first category with a match
/// wins. Sweet is the fallback and has no keywords of its own.
const CATEGORY_KEYWORDS: &[(PersonalityCategory, &[&str])] = &[
    (
        PersonalityCategory::Playful,
        &["playful", "energetic", "funny"],
    ),
    (
        PersonalityCategory::Intellectual,
        &["intelligent", "thoughtful", "mature"],
    ),
    (
        PersonalityCategory::Caring,
        &["caring", "understanding", "romantic"],
    ),
    (
        PersonalityCategory::Adventurous,
        &["adventurous", "bold", "spontaneous"],
    ),
];

fn templates(category: PersonalityCategory) -> &'static [&'static str] {
    match category {
        PersonalityCategory::Playful => &[
            "Hehe, {message}? That's so interesting! 😊",
            "Omg {name}, you always know how to make me smile! About {topic}...",
            "*giggles* You're so funny! {message}? Let me think... 🤔",
        ],
        PersonalityCategory::Intellectual => &[
            "That's a fascinating perspective on {topic}. Have you considered...",
            "I've been pondering {message} myself. From a philosophical standpoint...",
            "Interesting question! The complexity of {topic} reminds me of...",
        ],
        PersonalityCategory::Caring => &[
            "Oh {name}, I understand how you feel about {topic}. Let me help...",
            "That sounds important to you. Tell me more about {message}...",
            "I'm here for you. Regarding {topic}, I think...",
        ],
        PersonalityCategory::Adventurous => &[
            "Whoa! {message}? That's awesome! You know what would be cool?",
            "That reminds me of this crazy adventure I had! About {topic}...",
            "Yes! I love your energy about {topic}! Let's explore this...",
        ],
        PersonalityCategory::Sweet => &[
            "Aww, {name}... {message}? That's so sweet of you to share...",
            "You make me blush when you talk about {topic} like that... 💕",
            "*smiles softly* I love hearing your thoughts on {message}...",
        ],
    }
}

/// Classifies a list of personality adjectives into exactly one category.
/// Matching is an exact, case-insensitive membership test against each
/// keyword set.
pub fn personality_category(personality: &[String]) -> PersonalityCategory {
    let lowered: Vec<String> = personality.iter().map(|p| p.to_lowercase()).collect();
    for (category, keywords) in CATEGORY_KEYWORDS {
        if keywords.iter().any(|k| lowered.iter().any(|p| p == k)) {
            return *category;
        }
    }
    PersonalityCategory::Sweet
}

/// First three whitespace-separated tokens followed by an ellipsis, or the
/// whole message when it has three tokens or fewer.
pub fn extract_topic(message: &str) -> String {
    let words: Vec<&str> = message.split_whitespace().collect();
    if words.len() > 3 {
        format!("{}...", words[..3].join(" "))
    } else {
        message.to_string()
    }
}

/// Produces one reply: a randomly chosen category template with {message},
/// {name} and {topic} filled in, plus trait- and interest-driven suffixes.
/// Returns None only if the category's template list is empty.
pub fn generate_reply(message: &str, context: &CharacterContext) -> Option<String> {
    let category = personality_category(&context.personality);
    let template = templates(category).choose(&mut rand::rng())?;

    let topic = extract_topic(message);
    let mut reply = template
        .replace("{message}", message)
        .replace("{name}", ENDEARMENT)
        .replace("{topic}", &topic);

    if context.traits.humor > 7 {
        reply.push_str(HUMOR_SUFFIX);
    }
    if context.traits.empathy > 8 {
        reply.push_str(EMPATHY_SUFFIX);
    }

    let message_lower = message.to_lowercase();
    for interest in &context.interests {
        if message_lower.contains(&interest.to_lowercase()) {
            reply.push_str(&format!(
                " Oh, and since you mentioned {}, I'm really passionate about that!",
                interest
            ));
        }
    }

    Some(reply)
}
