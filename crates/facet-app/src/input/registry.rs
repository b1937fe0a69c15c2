use std::collections::HashMap;

use facet_config::keybinds::scene_groups;
use facet_config::schema::KeybindConfig;

use super::actions::Action;
use super::winit_keys::normalize_winit_key;
use crate::scene::SceneKind;

/// Maps normalized key names to the [`Action`]s live in one scene.
///
/// Built from [`KeybindConfig`] at startup and rebuilt on config reload.
pub struct KeyRegistry {
    bindings: HashMap<String, Action>,
}

/// A bare `" "` is the space bar; anything else drops surrounding blanks.
fn registry_key(name: &str) -> String {
    let trimmed = name.trim();
    let name = if trimmed.is_empty() { name } else { trimmed };
    normalize_winit_key(name).to_ascii_lowercase()
}

impl KeyRegistry {
    /// Bindings of the keybind group belonging to `kind`.
    pub fn for_scene(config: &KeybindConfig, kind: SceneKind) -> Self {
        let mut bindings = HashMap::new();

        let group = scene_groups(config)
            .into_iter()
            .find(|(name, _)| *name == kind.keybind_group())
            .map(|(_, binds)| binds)
            .unwrap_or_default();

        for (name, binding) in group {
            let Some(action) = Action::from_config_name(name) else {
                tracing::warn!("keybind '{name}' has no action");
                continue;
            };
            if binding.trim().is_empty() {
                tracing::warn!("keybind '{name}' is empty, skipping");
                continue;
            }
            bindings.insert(registry_key(binding), action);
        }

        Self { bindings }
    }

    /// Look up the action bound to a winit key name.
    pub fn lookup(&self, key: &str) -> Option<Action> {
        self.bindings.get(&registry_key(key)).copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
