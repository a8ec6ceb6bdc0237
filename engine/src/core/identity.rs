//! Display names, traits and avatars for new performers

use rand::Rng;
use rand::seq::SliceRandom;
use shared::PerformerId;

use crate::traits::IdentityGenerator;

pub const DEFAULT_AVATAR_BASE_URL: &str = "https://api.dicebear.com/7.x/bottts/svg?seed=";

/// Number of traits every performer gets
pub const TRAITS_PER_PERFORMER: usize = 3;

const ADJECTIVES: &[&str] = &[
    "Velvet", "Neon", "Dazzling", "Crimson", "Midnight", "Golden", "Electric", "Silent",
    "Wandering", "Lucky", "Fearless", "Cosmic", "Jolly", "Mysterious", "Radiant", "Rusty",
    "Twinkling", "Thunderous", "Gentle", "Wild", "Clever", "Stormy", "Brassy", "Glittering",
    "Nimble", "Dapper", "Curious", "Merry", "Frosty", "Sly", "Bold", "Whimsical",
];

const NOUNS: &[&str] = &[
    "Juggler", "Mime", "Tenor", "Drummer", "Acrobat", "Magician", "Fiddler", "Crooner",
    "Dancer", "Puppeteer", "Jester", "Bard", "Trumpeter", "Contortionist", "Ventriloquist",
    "Pianist", "Harpist", "Comedian", "Illusionist", "Tapdancer", "Soprano", "Busker",
    "Stuntman", "Clown", "Yodeler", "Beatboxer", "Cellist", "Poet", "Storyteller",
    "Firebreather", "Stiltwalker", "Whistler",
];

const TRAIT_POOL: &[&str] = &[
    "charismatic", "nervous", "ambitious", "lazy", "perfectionist", "reckless", "witty",
    "moody", "loyal", "greedy", "humble", "dramatic", "superstitious", "cheerful",
    "stubborn", "flamboyant",
];

/// Random adjective + noun + number names and traits drawn from a fixed pool
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdentity;

impl IdentityGenerator for RandomIdentity {
    fn name(&self) -> String {
        let mut rng = rand::thread_rng();
        let adjective = ADJECTIVES.choose(&mut rng).copied().unwrap_or("Nameless");
        let noun = NOUNS.choose(&mut rng).copied().unwrap_or("Performer");
        let number: u16 = rng.gen_range(0..1000);
        format!("{adjective} {noun} {number}")
    }

    fn traits(&self, count: usize) -> Vec<String> {
        TRAIT_POOL
            .choose_multiple(&mut rand::thread_rng(), count)
            .map(|t| t.to_string())
            .collect()
    }
}

/// Avatar URLs derived from the performer id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarStyle {
    base_url: String,
}

impl AvatarStyle {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn url_for(&self, id: &PerformerId) -> String {
        format!("{}{}", self.base_url, id)
    }
}

impl Default for AvatarStyle {
    fn default() -> Self {
        Self::new(DEFAULT_AVATAR_BASE_URL)
    }
}
