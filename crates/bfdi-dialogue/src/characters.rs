//! Built-in character table.
//!
//! Every character has a line for each daytime category. Night lines exist
//! for some characters only; the rest resolve to the fallback payload at night.

use std::sync::OnceLock;

use crate::category::Category::{self, Cloudy, Foggy, Night, Other, Raining, Snowy, Sunny, Windy};
use crate::payload::ResponsePayload;
use crate::table::{CharacterProfile, CharacterTable};

/// Expression drawn for a line; selects the image `<Name><Mood>.png`
#[derive(Debug, Clone, Copy)]
enum Mood {
    Happy,
    Neutral,
    Sad,
    Scared,
    Sleepy,
}

impl Mood {
    fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Neutral => "Neutral",
            Mood::Sad => "Sad",
            Mood::Scared => "Scared",
            Mood::Sleepy => "Sleepy",
        }
    }
}

use Mood::{Happy, Neutral, Sad, Scared, Sleepy};

struct Entry {
    name: &'static str,
    scale: f64,
    classes: &'static str,
    hints: &'static [(&'static str, &'static str)],
    lines: &'static [(Category, &'static str, Mood)],
}

const ENTRIES: &[Entry] = &[
    Entry {
        name: "Firey",
        scale: 1.0,
        classes: "",
        hints: &[],
        lines: &[
            (Sunny, "It's so hot! I love it!", Happy),
            (Night, "The sun's gone, so I'm the brightest thing out here!", Happy),
            (Cloudy, "Where did the sun go?", Neutral),
            (Raining, "Ack! Water! Stay away from me!", Scared),
            (Snowy, "Snow? That's just frozen water. Yikes!", Scared),
            (Windy, "Windy, but at least it's not raining.", Neutral),
            (Foggy, "I can't see the sun through this fog...", Sad),
            (Other, "Weather's weird today.", Neutral),
        ],
    },
    Entry {
        name: "Leafy",
        scale: 1.0,
        classes: "",
        hints: &[],
        lines: &[
            (Sunny, "Sunshine helps me grow!", Happy),
            (Night, "Time to rest up for tomorrow's sunshine!", Sleepy),
            (Cloudy, "Clouds are nice sometimes.", Neutral),
            (Raining, "Rain is great for plants like me!", Happy),
            (Snowy, "Snow is cold, but pretty!", Neutral),
            (Windy, "Wind makes my leaves flutter!", Happy),
            (Foggy, "Fog makes everything mysterious.", Neutral),
            (Other, "Interesting weather we're having!", Neutral),
        ],
    },
    Entry {
        name: "Bubble",
        scale: 0.9,
        classes: "",
        hints: &[],
        lines: &[
            (Sunny, "Yay, it's sunny! Bubbly day!", Happy),
            (Night, "The moon looks like a big bubble!", Happy),
            (Cloudy, "Clouds are okay, I guess.", Neutral),
            (Raining, "Oh no, rain might pop me!", Scared),
            (Snowy, "Snow is fun, but I'm careful!", Neutral),
            (Windy, "Windy days make me float!", Happy),
            (Foggy, "Fog makes it hard to see bubbles.", Sad),
            (Other, "Bubble-tastic weather!", Happy),
        ],
    },
    Entry {
        name: "Woody",
        scale: 1.0,
        classes: "",
        hints: &[],
        lines: &[
            (Sunny, "S-sunny days are nice... I guess.", Neutral),
            (Night, "It's s-so dark out...", Scared),
            (Cloudy, "Clouds make me nervous.", Scared),
            (Raining, "Rain is scary!", Scared),
            (Snowy, "Snow is cold... brrr.", Sad),
            (Windy, "Wind makes me anxious.", Scared),
            (Foggy, "I can't see! Yikes!", Scared),
            (Other, "I hope the weather gets better.", Sad),
        ],
    },
    Entry {
        name: "Pin",
        scale: 1.0,
        classes: "",
        hints: &[],
        lines: &[
            (Sunny, "Perfect weather for an experiment.", Happy),
            (Night, "Clear skies make for good stargazing data.", Happy),
            (Cloudy, "Clouds are interesting to study.", Neutral),
            (Raining, "Rain can be measured precisely.", Neutral),
            (Snowy, "Snowflakes are fascinating!", Happy),
            (Windy, "Wind speed is measurable.", Neutral),
            (Foggy, "Fog is just tiny water droplets.", Neutral),
            (Other, "Weather data is always useful.", Neutral),
        ],
    },
    Entry {
        name: "Eraser",
        scale: 1.0,
        classes: "",
        hints: &[],
        lines: &[
            (Sunny, "Sun's out! Let's play!", Happy),
            (Cloudy, "Cloudy, but still fun.", Happy),
            (Raining, "Rain? Let's erase those clouds!", Neutral),
            (Snowy, "Snowball fight, anyone?", Happy),
            (Windy, "Windy! Hold onto your hats!", Happy),
            (Foggy, "Foggy, but I can still see fun!", Happy),
            (Other, "Weather can't stop me!", Happy),
        ],
    },
    Entry {
        name: "Blocky",
        scale: 1.1,
        classes: "",
        hints: &[],
        lines: &[
            (Sunny, "Sunny days are perfect for pranks!", Happy),
            (Cloudy, "Cloudy? Still good for mischief.", Happy),
            (Raining, "Rainy? Time for indoor pranks!", Neutral),
            (Snowy, "Snow pranks are the best!", Happy),
            (Windy, "Windy? Let's fly some stuff!", Happy),
            (Foggy, "Fog is great for sneaky pranks.", Happy),
            (Other, "Weather's wild, just like my pranks!", Happy),
        ],
    },
    Entry {
        name: "Match",
        scale: 1.0,
        classes: "",
        hints: &[],
        lines: &[
            (Sunny, "Like, it's so bright! Love it!", Happy),
            (Cloudy, "Clouds are, like, okay.", Neutral),
            (Raining, "Rain ruins my hair, ugh.", Sad),
            (Snowy, "Snow is, like, cute!", Happy),
            (Windy, "Wind messes up my style.", Sad),
            (Foggy, "Fog is, like, mysterious.", Neutral),
            (Other, "Whatever, it's just weather.", Neutral),
        ],
    },
    Entry {
        name: "Pencil",
        scale: 1.0,
        classes: "",
        hints: &[],
        lines: &[
            (Sunny, "Sunny days are the best!", Happy),
            (Cloudy, "Cloudy, but still cool.", Neutral),
            (Raining, "Rainy days are for drawing inside.", Neutral),
            (Snowy, "Snow is so fun to draw!", Happy),
            (Windy, "Windy! Hold onto your pencils!", Neutral),
            (Foggy, "Fog makes everything look dreamy.", Happy),
            (Other, "Weather inspires my art.", Happy),
        ],
    },
    Entry {
        name: "Snowball",
        scale: 1.2,
        classes: "",
        hints: &[("transform-origin", "bottom center")],
        lines: &[
            (Sunny, "Too warm! I might melt!", Scared),
            (Night, "Finally, it's cooling down.", Happy),
            (Cloudy, "Clouds help me stay cool.", Neutral),
            (Raining, "Rain? I'm getting smaller!", Sad),
            (Snowy, "Snow! My favorite!", Happy),
            (Windy, "Windy, but I'm solid.", Neutral),
            (Foggy, "Fog is just more water.", Neutral),
            (Other, "Weather's not bad for a snowball.", Neutral),
        ],
    },
    Entry {
        name: "TennisBall",
        scale: 0.8,
        classes: "",
        hints: &[],
        lines: &[
            (Sunny, "Great day for tennis!", Happy),
            (Cloudy, "Clouds won't stop my serve.", Neutral),
            (Raining, "Rain delays the match.", Sad),
            (Snowy, "Snow tennis? That's new.", Neutral),
            (Windy, "Windy serves are tricky.", Neutral),
            (Foggy, "Foggy courts are hard to play on.", Sad),
            (Other, "Game, set, weather!", Happy),
        ],
    },
    Entry {
        name: "GolfBall",
        scale: 0.8,
        classes: "",
        hints: &[],
        lines: &[
            (Sunny, "Perfect for golf science.", Happy),
            (Cloudy, "Clouds don't affect my calculations.", Neutral),
            (Raining, "Rain affects golf ball trajectory.", Neutral),
            (Snowy, "Snow makes golf challenging.", Sad),
            (Windy, "Wind is a variable to consider.", Neutral),
            (Foggy, "Fog reduces visibility.", Neutral),
            (Other, "Weather is just another factor.", Neutral),
        ],
    },
    Entry {
        name: "Rocky",
        scale: 1.0,
        classes: "",
        hints: &[],
        lines: &[
            (Sunny, "...", Neutral),
            (Night, "...", Sleepy),
            (Cloudy, "...", Neutral),
            (Raining, "...", Neutral),
            (Snowy, "...", Neutral),
            (Windy, "...", Neutral),
            (Foggy, "...", Neutral),
            (Other, "...", Neutral),
        ],
    },
    Entry {
        name: "Spongy",
        scale: 1.3,
        classes: "",
        hints: &[],
        lines: &[
            (Sunny, "Soakin' up the sun!", Happy),
            (Cloudy, "Cloudy, but still squishy.", Neutral),
            (Raining, "Rain? I'm getting bigger!", Happy),
            (Snowy, "Snow is cold, but fun!", Neutral),
            (Windy, "Wind dries me out.", Sad),
            (Foggy, "Fog is just more moisture.", Happy),
            (Other, "Spongy weather!", Happy),
        ],
    },
    Entry {
        name: "Coiny",
        scale: 0.9,
        classes: "",
        hints: &[],
        lines: &[
            (Sunny, "Shiny weather for a shiny coin!", Happy),
            (Cloudy, "Clouds can't dull my shine.", Neutral),
            (Raining, "Rain makes me slippery.", Sad),
            (Snowy, "Snow is cold on metal.", Sad),
            (Windy, "Windy, but I'm heavy.", Neutral),
            (Foggy, "Fog makes me hard to find.", Neutral),
            (Other, "Heads or tails on the weather?", Neutral),
        ],
    },
    Entry {
        name: "Needle",
        scale: 1.0,
        classes: "",
        hints: &[("margin-top", "-2rem")],
        lines: &[
            (Sunny, "Sharp weather today.", Neutral),
            (Cloudy, "Clouds are fine.", Neutral),
            (Raining, "Rain makes me rust.", Sad),
            (Snowy, "Snow is cold, but manageable.", Neutral),
            (Windy, "Windy, but I stand tall.", Neutral),
            (Foggy, "Fog is no match for me.", Neutral),
            (Other, "Weather's just weather.", Neutral),
        ],
    },
    Entry {
        name: "Teardrop",
        scale: 0.9,
        classes: "text-emoji",
        hints: &[],
        lines: &[
            (Sunny, "😊", Happy),
            (Night, "😴", Sleepy),
            (Cloudy, "😐", Neutral),
            (Raining, "😄", Happy),
            (Snowy, "😯", Neutral),
            (Windy, "😶", Neutral),
            (Foggy, "😶", Neutral),
            (Other, "🙂", Neutral),
        ],
    },
    Entry {
        name: "IceCube",
        scale: 0.9,
        classes: "",
        hints: &[],
        lines: &[
            (Sunny, "I'm melting! Help!", Scared),
            (Night, "Nice and cool tonight.", Happy),
            (Cloudy, "Clouds help me stay cool.", Neutral),
            (Raining, "Rain is just more water.", Neutral),
            (Snowy, "Snow! I feel at home.", Happy),
            (Windy, "Wind chills me.", Happy),
            (Foggy, "Fog is refreshing.", Happy),
            (Other, "Cool weather, huh?", Neutral),
        ],
    },
    Entry {
        name: "Book",
        scale: 1.0,
        classes: "",
        hints: &[],
        lines: &[
            (Sunny, "Great weather for reading outside.", Happy),
            (Night, "Perfect night for a bedtime story.", Sleepy),
            (Cloudy, "Cloudy days are cozy for books.", Happy),
            (Raining, "Rainy days are perfect for reading.", Happy),
            (Snowy, "Snow and books? Yes please.", Happy),
            (Windy, "Windy, but I can still read.", Neutral),
            (Foggy, "Fog makes reading mysterious.", Neutral),
            (Other, "Any weather is good for books.", Happy),
        ],
    },
    Entry {
        name: "Lollipop",
        scale: 1.0,
        classes: "",
        hints: &[],
        lines: &[
            (Sunny, "Sweet sunshine!", Happy),
            (Cloudy, "Clouds are okay.", Neutral),
            (Raining, "Rain melts my sugar!", Sad),
            (Snowy, "Snow is chilly for candy.", Neutral),
            (Windy, "Windy, but I'm wrapped up.", Neutral),
            (Foggy, "Fog is sticky.", Neutral),
            (Other, "Sweet weather!", Happy),
        ],
    },
];

fn build(entry: &Entry) -> CharacterProfile {
    entry
        .lines
        .iter()
        .fold(CharacterProfile::new(entry.name), |profile, (category, text, mood)| {
            let payload = entry.hints.iter().fold(
                ResponsePayload::new(*text)
                    .with_image(format!("{}{}.png", entry.name, mood.as_str()))
                    .with_scale(entry.scale)
                    .with_classes(entry.classes),
                |payload, (property, value)| payload.with_hint(*property, *value),
            );
            profile.with_response(*category, payload)
        })
}

impl CharacterTable {
    /// The built-in table, constructed on first use.
    pub fn builtin() -> &'static CharacterTable {
        static BUILTIN: OnceLock<CharacterTable> = OnceLock::new();
        BUILTIN.get_or_init(|| CharacterTable {
            profiles: ENTRIES.iter().map(build).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_passes_validation() {
        let builtin = CharacterTable::builtin();
        let rebuilt = CharacterTable::new(builtin.profiles.clone()).unwrap();
        assert_eq!(&rebuilt, builtin);
        assert_eq!(builtin.len(), 20);
    }

    #[test]
    fn test_every_character_covers_daytime_categories() {
        for character in CharacterTable::builtin().characters() {
            for category in [Sunny, Cloudy, Raining, Snowy, Windy, Foggy, Other] {
                assert!(
                    character.has_response(category),
                    "{} has no {} line",
                    character.name(),
                    category
                );
            }
        }
    }

    #[test]
    fn test_night_is_sparse() {
        let table = CharacterTable::builtin();
        assert!(table.get("Leafy").unwrap().has_response(Night));
        assert!(table.get("Match").unwrap().resolve(Night).is_fallback());
    }

    #[test]
    fn test_payload_art_and_layout() {
        let table = CharacterTable::builtin();

        let leafy = table.get("Leafy").unwrap().resolve(Sunny);
        assert_eq!(leafy.dialogue_text, "Sunshine helps me grow!");
        assert_eq!(leafy.image_reference, "LeafyHappy.png");

        let snowball = table.get("Snowball").unwrap().resolve(Snowy);
        assert_eq!(snowball.visual_scale, 1.2);
        assert_eq!(
            snowball.placement_hints.get("transform-origin").map(String::as_str),
            Some("bottom center")
        );
    }
}
