//! Item template records
//!
//! The item table is owned by the host. Only the fields used to pick out
//! ammunition and its penetration are typed; everything else is carried
//! through untouched so a table can be written back as it was read.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Name of the parent template every ammunition item hangs off
pub const AMMO_PARENT_NAME: &str = "Ammo";

/// Name prefix for fragment pseudo-ammunition that is never recoloured
pub const SHRAPNEL_PREFIX: &str = "shrapnel";

pub const BULLET_TYPE: &str = "bullet";
pub const BUCKSHOT_TYPE: &str = "buckshot";

/// Item id to template record
pub type ItemTable = BTreeMap<String, TemplateItem>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateItem {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "_name")]
    pub name: String,

    #[serde(rename = "_parent", default)]
    pub parent: String,

    #[serde(rename = "_props", default)]
    pub props: ItemProps,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

const AMMO_TYPE_KEY: &str = "ammoType";
const PENETRATION_KEY: &str = "PenetrationPower";
const BACKGROUND_KEY: &str = "BackgroundColor";

/// The `_props` object of a template
///
/// A typed field is only filled when the key holds a value of that type.
/// Nulls and mistyped values stay in `extra` and are written back as read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct ItemProps {
    pub ammo_type: Option<String>,
    pub penetration_power: Option<i64>,
    pub background_color: Option<String>,
    pub extra: Map<String, Value>,
}

fn take_typed<T>(
    raw: &mut Map<String, Value>,
    key: &str,
    convert: impl Fn(&Value) -> Option<T>,
) -> Option<T> {
    let value = raw.get(key).and_then(convert)?;
    raw.remove(key);
    Some(value)
}

impl From<Map<String, Value>> for ItemProps {
    fn from(mut raw: Map<String, Value>) -> Self {
        let as_string = |v: &Value| v.as_str().map(str::to_string);
        Self {
            ammo_type: take_typed(&mut raw, AMMO_TYPE_KEY, as_string),
            penetration_power: take_typed(&mut raw, PENETRATION_KEY, Value::as_i64),
            background_color: take_typed(&mut raw, BACKGROUND_KEY, as_string),
            extra: raw,
        }
    }
}

impl From<ItemProps> for Map<String, Value> {
    fn from(props: ItemProps) -> Self {
        let mut map = props.extra;
        if let Some(ammo_type) = props.ammo_type {
            map.insert(AMMO_TYPE_KEY.to_string(), Value::String(ammo_type));
        }
        if let Some(penetration) = props.penetration_power {
            map.insert(PENETRATION_KEY.to_string(), Value::from(penetration));
        }
        if let Some(background) = props.background_color {
            map.insert(BACKGROUND_KEY.to_string(), Value::String(background));
        }
        map
    }
}

impl TemplateItem {
    /// Bare record with a name and parent, mostly for building tables by hand
    pub fn new(id: impl Into<String>, name: impl Into<String>, parent: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent: parent.into(),
            props: ItemProps::default(),
            extra: Map::new(),
        }
    }

    /// Builder-style setter for the ammunition props
    pub fn with_ammo(mut self, ammo_type: &str, penetration: i64, background: &str) -> Self {
        self.props.ammo_type = Some(ammo_type.to_string());
        self.props.penetration_power = Some(penetration);
        self.props.background_color = Some(background.to_string());
        self
    }
}

/// The template whose name is [`AMMO_PARENT_NAME`]
pub fn find_ammo_parent(items: &ItemTable) -> Option<&TemplateItem> {
    items.values().find(|item| item.name == AMMO_PARENT_NAME)
}

/// Whether an item is a bullet or buckshot round eligible for recolouring
///
/// Requires the parent to be the ammo template and `ammoType`,
/// `PenetrationPower` and `BackgroundColor` to all be present. Grenades,
/// shrapnel and anything else under the ammo parent are left alone.
pub fn is_recolorable(item: &TemplateItem, parent_id: &str) -> bool {
    let props = &item.props;
    item.parent == parent_id
        && props.penetration_power.is_some()
        && props.background_color.is_some()
        && !item.name.starts_with(SHRAPNEL_PREFIX)
        && matches!(
            props.ammo_type.as_deref(),
            Some(BULLET_TYPE) | Some(BUCKSHOT_TYPE)
        )
}
