//! Canned styling advice
//!
//! A small fixed rule table answers the most common seasonal/occasion
//! questions without touching the LLM. Matching is substring containment on
//! the lowercased message, checked in priority order; everything else falls
//! through to the Groq completion client.

/// Canned reply for messages mentioning summer
pub const SUMMER_REPLY: &str = "For summer, I recommend light fabrics like linen and cotton. Floral prints and pastel colors are trending this season! ☀️👗";

/// Canned reply for messages mentioning winter
pub const WINTER_REPLY: &str = "Layering is key for winter! Try a turtleneck under a wool coat, paired with a chunky scarf. Don't forget stylish boots! ❄️🧥";

/// Canned reply for messages mentioning a party
pub const PARTY_REPLY: &str = "For a party, you can't go wrong with a classic little black dress or a sharp blazer with dark jeans. Add some statement accessories to stand out! 🎉✨";

/// Canned reply for messages mentioning casual wear
pub const CASUAL_REPLY: &str = "A nice pair of fitted jeans, a white tee, and a denim jacket is a timeless casual look. Sneakers or loafers complete the vibe. 👖👟";

/// Reply when the request carries no message at all
pub const EMPTY_MESSAGE_REPLY: &str = "I didn't catch that. Could you say it again?";

/// Reply when GROQ_API_KEY is not configured
pub const MISSING_KEY_REPLY: &str = "My connection to the fashion world is a bit spotty right now (API Key missing). Please check the server configuration! 🚫👗";

/// Reply when the Groq call fails for any reason
pub const REMOTE_FAILURE_REPLY: &str = "Darling, I'm having a moment... I couldn't reach my fashion sources. Please check your API key connection! 💅✨";

/// Keyword rules in priority order; first match wins
const RULES: [(&str, &str); 4] = [
    ("summer", SUMMER_REPLY),
    ("winter", WINTER_REPLY),
    ("party", PARTY_REPLY),
    ("casual", CASUAL_REPLY),
];

/// Look up a canned reply for a message
///
/// Returns `None` when no keyword matches, meaning the caller should
/// delegate to the completion client. Pure and synchronous.
pub fn canned_reply(message: &str) -> Option<&'static str> {
    let msg = message.to_lowercase();
    RULES
        .iter()
        .find(|(keyword, _)| msg.contains(keyword))
        .map(|&(_, reply)| reply)
}
