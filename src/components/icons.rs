/// Glyph for an icon name used in the content files. Unknown names fall
/// back to a neutral bullet so a typo never breaks a card.
pub fn glyph(name: &str) -> &'static str {
    match name {
        "award" => "🏆",
        "calculator" => "🧮",
        "calendar" => "📅",
        "card" => "💳",
        "check" => "✅",
        "chef" => "👩‍🍳",
        "facebook" => "📘",
        "handshake" => "🤝",
        "heart" => "💚",
        "instagram" => "📸",
        "leaf" => "🌿",
        "lightbulb" => "💡",
        "linkedin" => "💼",
        "mail" => "✉️",
        "milk" => "🥛",
        "package" => "📦",
        "phone" => "📞",
        "pin" => "📍",
        "quote" => "❝",
        "recycle" => "♻️",
        "shield" => "🛡️",
        "star" => "⭐",
        "timer" => "⏱️",
        "trees" => "🌳",
        "twitter" => "🐦",
        "user" => "🧑‍🌾",
        "users" => "👥",
        "utensils" => "🍴",
        _ => "•",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{self, Block, PageId};

    #[test]
    fn unknown_names_fall_back() {
        assert_eq!(glyph("no-such-icon"), "•");
    }

    #[test]
    fn every_icon_in_content_is_known() {
        let mut names = Vec::new();
        for id in PageId::ALL {
            for section in content::page(id).unwrap().sections {
                match section.block {
                    Block::Cards { cards } | Block::Story { cards, .. } => {
                        names.extend(cards.into_iter().filter_map(|c| c.icon));
                    }
                    Block::Nutrition { nutrients } => names.extend(nutrients.into_iter().map(|n| n.icon)),
                    Block::Recipes { recipes } => names.extend(recipes.into_iter().map(|r| r.icon)),
                    Block::Steps { steps } => names.extend(steps.into_iter().map(|s| s.icon)),
                    Block::Stats { stats } => names.extend(stats.into_iter().map(|s| s.icon)),
                    _ => {}
                }
            }
        }
        names.extend(content::contact_page().unwrap().socials.into_iter().map(|s| s.icon));

        assert!(!names.is_empty());
        for name in names {
            assert_ne!(glyph(&name), "•", "unmapped icon `{name}`");
        }
    }
}
