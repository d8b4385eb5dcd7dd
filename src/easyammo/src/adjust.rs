//! Ammunition background colour adjustment
//!
//! One deterministic pass over the item table: locate the ammo parent,
//! pick out bullet and buckshot rounds, resolve each one's colour from its
//! penetration and write it back.

use crate::config::Configuration;
use crate::items::{find_ammo_parent, is_recolorable, ItemTable};
use crate::logger::{HostLogger, LogColour};
use crate::resolve::resolve_color;

/// Prefix on every message sent to the host logger
pub const LOG_PREFIX: &str = "EasyAmmo";

/// Outcome of an adjustment pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjustResult {
    /// Items whose background colour was written
    pub changed: usize,
    /// Items left untouched because their colour could not be resolved
    pub failed: usize,
    pub errors: Vec<(String, String)>, // (item id, error message)
}

/// Recolour every eligible ammunition item in `items`
///
/// A missing ammo parent is reported once, in red, and nothing is changed.
/// A resolution failure only affects its own item: it is logged and the
/// item keeps its existing colour.
pub fn adjust_ammunition(
    items: &mut ItemTable,
    config: &Configuration,
    can_interpolate: bool,
    logger: &dyn HostLogger,
) -> AdjustResult {
    let debug = config.general.debug;
    let mut result = AdjustResult::default();

    let Some(parent_id) = find_ammo_parent(items).map(|parent| parent.id.clone()) else {
        logger.log(
            &format!(
                "{}: Parent ammo ID not found. Something has gone terribly wrong. No changes made.",
                LOG_PREFIX
            ),
            LogColour::Red,
        );
        return result;
    };

    if debug {
        logger.log(
            &format!("{}: Parent ammo ID found: {}.", LOG_PREFIX, parent_id),
            LogColour::Gray,
        );
    }

    for (id, item) in items.iter_mut() {
        if !is_recolorable(item, &parent_id) {
            continue;
        }
        let Some(penetration) = item.props.penetration_power else {
            continue;
        };

        match resolve_color(penetration, &config.penetration, can_interpolate) {
            Ok(color) => {
                let color = color.to_string();
                if debug {
                    logger.log(
                        &format!(
                            "{}: Ammo {} has pen value of {}. Set background colour to {}.",
                            LOG_PREFIX, item.name, penetration, color
                        ),
                        LogColour::Gray,
                    );
                }
                item.props.background_color = Some(color);
                result.changed += 1;
            }
            Err(e) => {
                logger.log(&format!("{}: {}", LOG_PREFIX, e), LogColour::Red);
                result.failed += 1;
                result.errors.push((id.clone(), e.to_string()));
            }
        }
    }

    logger.log(
        &format!(
            "{}: Adjusted the background colour of {} types of ammunition.",
            LOG_PREFIX, result.changed
        ),
        LogColour::Cyan,
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GeneralSettings, PenetrationTable, ThresholdEntry};
    use crate::items::TemplateItem;
    use crate::logger::MemoryLogger;
    use crate::reference::VanillaColor;

    fn config(debug: bool) -> Configuration {
        Configuration {
            general: GeneralSettings {
                debug,
                ..GeneralSettings::default()
            },
            penetration: PenetrationTable::Thresholds(vec![
                ThresholdEntry {
                    min_penetration: 40,
                    background_color: VanillaColor::Red,
                },
                ThresholdEntry {
                    min_penetration: 20,
                    background_color: VanillaColor::Green,
                },
            ]),
        }
    }

    fn table() -> ItemTable {
        [
            TemplateItem::new("root", "Item", ""),
            TemplateItem::new("ammo", "Ammo", "root"),
            TemplateItem::new("a", "patron_762x51_M993", "ammo").with_ammo("bullet", 70, "default"),
            TemplateItem::new("b", "patron_12x70_flechette", "ammo").with_ammo("buckshot", 31, "default"),
            TemplateItem::new("c", "patron_9x18_P", "ammo").with_ammo("bullet", 5, "default"),
            TemplateItem::new("d", "patron_40x46_M433", "ammo").with_ammo("grenade", 60, "yellow"),
            TemplateItem::new("e", "shrapnel_RGD5", "ammo").with_ammo("bullet", 8, "yellow"),
        ]
        .into_iter()
        .map(|item| (item.id.clone(), item))
        .collect()
    }

    fn background(items: &ItemTable, id: &str) -> Option<String> {
        items[id].props.background_color.clone()
    }

    #[test]
    fn test_adjusts_only_eligible_items() {
        let mut items = table();
        let logger = MemoryLogger::new();

        let result = adjust_ammunition(&mut items, &config(false), false, &logger);

        assert_eq!(result.changed, 3);
        assert_eq!(result.failed, 0);
        assert_eq!(background(&items, "a").as_deref(), Some("red"));
        assert_eq!(background(&items, "b").as_deref(), Some("green"));
        assert_eq!(background(&items, "c").as_deref(), Some("black"));
        assert_eq!(background(&items, "d").as_deref(), Some("yellow"));
        assert_eq!(background(&items, "e").as_deref(), Some("yellow"));

        assert_eq!(
            logger.entries(),
            vec![(
                "EasyAmmo: Adjusted the background colour of 3 types of ammunition.".to_string(),
                LogColour::Cyan
            )]
        );
    }

    #[test]
    fn test_missing_parent_changes_nothing() {
        let mut items = table();
        items.remove("ammo");
        let before = items.clone();
        let logger = MemoryLogger::new();

        let result = adjust_ammunition(&mut items, &config(true), false, &logger);

        assert_eq!(result, AdjustResult::default());
        assert_eq!(items, before);
        assert_eq!(logger.len(), 1);
        assert_eq!(logger.messages(LogColour::Red).len(), 1);
        assert!(logger.messages(LogColour::Red)[0].contains("Parent ammo ID not found"));
    }

    #[test]
    fn test_debug_logs_each_item() {
        let mut items = table();
        let logger = MemoryLogger::new();

        adjust_ammunition(&mut items, &config(true), false, &logger);

        let debug = logger.messages(LogColour::Gray);
        assert_eq!(debug.len(), 4);
        assert_eq!(debug[0], "EasyAmmo: Parent ammo ID found: ammo.");
        assert!(debug.contains(
            &"EasyAmmo: Ammo patron_762x51_M993 has pen value of 70. Set background colour to red."
                .to_string()
        ));
    }

    #[test]
    fn test_second_pass_is_idempotent() {
        let mut items = table();
        let logger = MemoryLogger::new();

        adjust_ammunition(&mut items, &config(false), false, &logger);
        let after_first = items.clone();
        let second = adjust_ammunition(&mut items, &config(false), false, &logger);

        assert_eq!(second.changed, 3);
        assert_eq!(items, after_first);
    }
}
