// X3dPrefs - core/registry.rs
//
// The preference registry: typed get/set/reset over a namespaced store.
//
// Reads never fail. An absent key, or a stored value that does not decode
// as the requested type, yields the default. Writes overwrite silently and
// are visible to the next read. Reset deletes the stored value so later
// reads see the default again.
//
// One `Preferences` is built at startup and passed by reference to every
// form and dialog; there is no global state.

use super::defaults::{Platform, PlatformDefaults, Tool};
use super::keys::{DefaultSource, PrefGroup, PrefKey, PrefKind};
use super::store::PreferenceStore;
use crate::util::constants::{
    CERTIFICATE_SERIAL_SCALE, MILLIS_PER_HOUR, MILLIS_PER_SECOND, PREFS_NAMESPACE,
};
use crate::util::error::ValueError;

// =============================================================================
// Value encoding
// =============================================================================

/// A Rust type that can be stored as a preference string.
pub trait PrefValue: Sized + Default {
    /// Kind of key this type is normally read from.
    const KIND: PrefKind;

    /// Parse a stored string. `None` means "use the default".
    fn decode(raw: &str) -> Option<Self>;

    fn encode(&self) -> String;
}

impl PrefValue for String {
    const KIND: PrefKind = PrefKind::Text;

    fn decode(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }

    fn encode(&self) -> String {
        self.clone()
    }
}

impl PrefValue for bool {
    const KIND: PrefKind = PrefKind::Bool;

    /// Only "true" and "false" are recognised, in any letter case.
    fn decode(raw: &str) -> Option<Self> {
        if raw.eq_ignore_ascii_case("true") {
            Some(true)
        } else if raw.eq_ignore_ascii_case("false") {
            Some(false)
        } else {
            None
        }
    }

    fn encode(&self) -> String {
        self.to_string()
    }
}

impl PrefValue for i64 {
    const KIND: PrefKind = PrefKind::Long;

    fn decode(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }

    fn encode(&self) -> String {
        self.to_string()
    }
}

// =============================================================================
// DIS network settings
// =============================================================================

/// Distributed Interactive Simulation connection settings.
///
/// Nothing here has a built-in default; callers supply a full set of
/// fallbacks and get back the stored values merged over them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisSettings {
    pub address: String,
    pub port: String,
    pub app_id: String,
    pub entity_id: String,
    pub site_id: String,
    pub translation_scale: [String; 3],
}

// =============================================================================
// Registry
// =============================================================================

/// The preference registry.
#[derive(Debug)]
pub struct Preferences {
    store: Box<dyn PreferenceStore>,
    namespace: String,
    defaults: PlatformDefaults,
    legacy_read_aliases: bool,
    certificate_serial_default: i64,
}

impl Preferences {
    /// Build the registry over `store`, with tool path defaults already
    /// resolved for the host.
    pub fn new(store: Box<dyn PreferenceStore>, defaults: PlatformDefaults) -> Self {
        let hour_stamp = chrono::Utc::now().timestamp_millis() / MILLIS_PER_HOUR;
        Self {
            store,
            namespace: PREFS_NAMESPACE.to_string(),
            defaults,
            legacy_read_aliases: true,
            certificate_serial_default: hour_stamp * CERTIFICATE_SERIAL_SCALE,
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Turn the legacy CAD filter read aliases on or off.
    pub fn with_legacy_read_aliases(mut self, enabled: bool) -> Self {
        self.legacy_read_aliases = enabled;
        self
    }

    pub fn with_certificate_serial_default(mut self, serial: i64) -> Self {
        self.certificate_serial_default = serial;
        self
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn platform(&self) -> Platform {
        self.defaults.platform()
    }

    pub fn platform_defaults(&self) -> &PlatformDefaults {
        &self.defaults
    }

    pub fn legacy_read_aliases(&self) -> bool {
        self.legacy_read_aliases
    }

    // -------------------------------------------------------------------------
    // Typed access
    // -------------------------------------------------------------------------

    /// Read `key`, falling back to its built-in default.
    pub fn get<T: PrefValue>(&self, key: PrefKey) -> T {
        self.read::<T>(key).unwrap_or_else(|| {
            T::decode(&self.default_text(key)).unwrap_or_default()
        })
    }

    /// Read `key`, falling back to a caller-supplied default.
    pub fn get_or<T: PrefValue>(&self, key: PrefKey, default: T) -> T {
        self.read::<T>(key).unwrap_or(default)
    }

    pub fn set<T: PrefValue>(&mut self, key: PrefKey, value: T) {
        self.check_kind::<T>(key);
        let encoded = value.encode();
        tracing::debug!(key = key.key(), value = %encoded, "Preference set");
        self.store.put(&self.namespace, key.key(), encoded);
    }

    /// Delete the stored value so reads return the default again.
    pub fn reset(&mut self, key: PrefKey) {
        let removed = self.store.remove(&self.namespace, key.key());
        tracing::debug!(key = key.key(), removed, "Preference reset");
    }

    /// Reset every key of `group` at once.
    pub fn reset_group(&mut self, group: PrefGroup) {
        let keys: Vec<&str> = group.keys().iter().map(|k| k.key()).collect();
        let removed = self.store.remove_all(&self.namespace, &keys);
        tracing::info!(group = ?group, keys = keys.len(), removed, "Preference group reset");
    }

    /// True when `key` holds a stored value rather than reading its default.
    pub fn is_set(&self, key: PrefKey) -> bool {
        self.store.get(&self.namespace, key.key()).is_some()
    }

    /// Built-in default of `key` in stored-string form.
    ///
    /// Keys whose default is caller supplied report an empty string.
    pub fn default_text(&self, key: PrefKey) -> String {
        match key.default_source() {
            DefaultSource::Flag(value) => value.to_string(),
            DefaultSource::Text(value) => value.to_string(),
            DefaultSource::ToolPath(tool) => self.defaults.path(tool).to_string(),
            DefaultSource::CallerSupplied => String::new(),
            DefaultSource::CertificateSerial => self.certificate_serial_default.to_string(),
        }
    }

    fn read<T: PrefValue>(&self, key: PrefKey) -> Option<T> {
        self.check_kind::<T>(key);
        let storage_key = self.read_key(key);
        let raw = self.store.get(&self.namespace, storage_key)?;
        let decoded = T::decode(&raw);
        if decoded.is_none() {
            tracing::debug!(key = storage_key, raw = %raw, "Stored value not decodable, using default");
        }
        decoded
    }

    /// Storage key a read of `key` consults, honouring legacy aliases.
    fn read_key(&self, key: PrefKey) -> &'static str {
        match key.legacy_read_alias() {
            Some(alias) if self.legacy_read_aliases => alias.key(),
            _ => key.key(),
        }
    }

    fn check_kind<T: PrefValue>(&self, key: PrefKey) {
        // Any key can be read as text; other mismatches are caller bugs.
        if T::KIND != key.kind() && T::KIND != PrefKind::Text {
            tracing::warn!(
                key = key.key(),
                expected = ?key.kind(),
                requested = ?T::KIND,
                "Preference accessed with mismatched type"
            );
        }
    }

    // -------------------------------------------------------------------------
    // Raw string-keyed access
    // -------------------------------------------------------------------------

    pub fn get_str(&self, key: &str, default: &str) -> String {
        self.store
            .get(&self.namespace, key)
            .unwrap_or_else(|| default.to_string())
    }

    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.store
            .get(&self.namespace, key)
            .and_then(|raw| bool::decode(&raw))
            .unwrap_or(default)
    }

    pub fn get_long(&self, key: &str, default: i64) -> i64 {
        self.store
            .get(&self.namespace, key)
            .and_then(|raw| i64::decode(&raw))
            .unwrap_or(default)
    }

    pub fn put_str(&mut self, key: &str, value: &str) {
        self.store.put(&self.namespace, key, value.to_string());
    }

    pub fn put_bool(&mut self, key: &str, value: bool) {
        self.store.put(&self.namespace, key, value.encode());
    }

    pub fn put_long(&mut self, key: &str, value: i64) {
        self.store.put(&self.namespace, key, value.encode());
    }

    pub fn remove(&mut self, key: &str) -> bool {
        self.store.remove(&self.namespace, key)
    }

    /// Every key holding a stored value in this registry's namespace.
    pub fn stored_keys(&self) -> Vec<String> {
        self.store.keys(&self.namespace)
    }

    // -------------------------------------------------------------------------
    // Derived values
    // -------------------------------------------------------------------------

    fn color_triplet(&self, keys: [PrefKey; 3]) -> String {
        let [r, g, b] = keys.map(|k| self.get::<String>(k));
        format!("{r} {g} {b}")
    }

    /// Visualization line color as "r g b".
    pub fn visualize_line_color(&self) -> String {
        self.color_triplet([
            PrefKey::VisualizeLineColorRed,
            PrefKey::VisualizeLineColorGreen,
            PrefKey::VisualizeLineColorBlue,
        ])
    }

    /// Visualization shape color as "r g b".
    pub fn visualize_shape_color(&self) -> String {
        self.color_triplet([
            PrefKey::VisualizeShapeColorRed,
            PrefKey::VisualizeShapeColorGreen,
            PrefKey::VisualizeShapeColorBlue,
        ])
    }

    pub fn visualize_hanim_joint_color(&self) -> String {
        self.color_triplet([
            PrefKey::VisualizeHanimJointColorRed,
            PrefKey::VisualizeHanimJointColorGreen,
            PrefKey::VisualizeHanimJointColorBlue,
        ])
    }

    pub fn visualize_hanim_segment_color(&self) -> String {
        self.color_triplet([
            PrefKey::VisualizeHanimSegmentColorRed,
            PrefKey::VisualizeHanimSegmentColorGreen,
            PrefKey::VisualizeHanimSegmentColorBlue,
        ])
    }

    pub fn visualize_hanim_site_color(&self) -> String {
        self.color_triplet([
            PrefKey::VisualizeHanimSiteColorRed,
            PrefKey::VisualizeHanimSiteColorGreen,
            PrefKey::VisualizeHanimSiteColorBlue,
        ])
    }

    /// Delay between successive tool launches, in milliseconds.
    pub fn launch_interval_millis(&self) -> Result<u64, ValueError> {
        let raw = self.get::<String>(PrefKey::LaunchInterval);
        raw.trim()
            .parse::<u64>()
            .map(|secs| secs.saturating_mul(MILLIS_PER_SECOND))
            .map_err(|_| ValueError::NotInteger {
                key: PrefKey::LaunchInterval.key().to_string(),
                value: raw,
            })
    }

    pub fn last_certificate_serial(&self) -> i64 {
        self.get(PrefKey::CertificateSerial)
    }

    pub fn set_last_certificate_serial(&mut self, serial: i64) {
        self.set(PrefKey::CertificateSerial, serial);
    }

    // -------------------------------------------------------------------------
    // External tools
    // -------------------------------------------------------------------------

    pub fn tool_path(&self, tool: Tool) -> String {
        self.get(tool.path_key())
    }

    pub fn set_tool_path(&mut self, tool: Tool, path: &str) {
        self.set(tool.path_key(), path.to_string());
    }

    /// Whether `tool` starts automatically. Tools without the option never do.
    pub fn auto_launch(&self, tool: Tool) -> bool {
        tool.autolaunch_key().is_some_and(|key| self.get(key))
    }

    pub fn set_auto_launch(&mut self, tool: Tool, enabled: bool) {
        match tool.autolaunch_key() {
            Some(key) => self.set(key, enabled),
            None => tracing::warn!(tool = %tool, "Tool has no auto-launch option"),
        }
    }

    /// Display name of a user-defined tool.
    pub fn tool_name(&self, tool: Tool) -> Option<String> {
        tool.name_key().map(|key| self.get(key))
    }

    /// Command-line switches of a user-defined tool.
    pub fn tool_switch(&self, tool: Tool) -> Option<String> {
        tool.switch_key().map(|key| self.get(key))
    }

    // -------------------------------------------------------------------------
    // DIS
    // -------------------------------------------------------------------------

    pub fn dis_settings(&self, fallback: &DisSettings) -> DisSettings {
        let [sx, sy, sz] = &fallback.translation_scale;
        DisSettings {
            address: self.get_or(PrefKey::DisAddress, fallback.address.clone()),
            port: self.get_or(PrefKey::DisPort, fallback.port.clone()),
            app_id: self.get_or(PrefKey::DisAppId, fallback.app_id.clone()),
            entity_id: self.get_or(PrefKey::DisEntityId, fallback.entity_id.clone()),
            site_id: self.get_or(PrefKey::DisSiteId, fallback.site_id.clone()),
            translation_scale: [
                self.get_or(PrefKey::DisScaleX, sx.clone()),
                self.get_or(PrefKey::DisScaleY, sy.clone()),
                self.get_or(PrefKey::DisScaleZ, sz.clone()),
            ],
        }
    }

    pub fn set_dis_settings(&mut self, dis: &DisSettings) {
        let [sx, sy, sz] = &dis.translation_scale;
        self.set(PrefKey::DisAddress, dis.address.clone());
        self.set(PrefKey::DisPort, dis.port.clone());
        self.set(PrefKey::DisAppId, dis.app_id.clone());
        self.set(PrefKey::DisEntityId, dis.entity_id.clone());
        self.set(PrefKey::DisSiteId, dis.site_id.clone());
        self.set(PrefKey::DisScaleX, sx.clone());
        self.set(PrefKey::DisScaleY, sy.clone());
        self.set(PrefKey::DisScaleZ, sz.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::defaults::HostProfile;
    use crate::core::store::MemoryStore;

    fn prefs_for(os_name: &str) -> Preferences {
        let host = HostProfile {
            os_name: os_name.to_string(),
            user_name: "tester".to_string(),
            ..Default::default()
        };
        Preferences::new(
            Box::new(MemoryStore::new()),
            PlatformDefaults::resolve(&host),
        )
        .with_certificate_serial_default(4_700_000)
    }

    fn prefs() -> Preferences {
        prefs_for("Linux")
    }

    #[test]
    fn test_unset_keys_read_builtin_defaults() {
        let p = prefs();
        assert!(p.get::<bool>(PrefKey::PrependNewline));
        assert!(!p.get::<bool>(PrefKey::AppendNewline));
        assert_eq!(p.get::<String>(PrefKey::VisualizeConeLines), "8");
        assert_eq!(p.get::<String>(PrefKey::CadX3dVersion), "3.2");
        assert_eq!(p.get::<i64>(PrefKey::CertificateSerial), 4_700_000);
    }

    #[test]
    fn test_get_or_returns_caller_default_until_set() {
        let mut p = prefs();
        assert_eq!(p.get_or(PrefKey::DisPort, "3000".to_string()), "3000");
        p.set(PrefKey::DisPort, "62040".to_string());
        assert_eq!(p.get_or(PrefKey::DisPort, "3000".to_string()), "62040");
    }

    #[test]
    fn test_set_then_reset_restores_default() {
        let mut p = prefs();
        p.set(PrefKey::AutoValidate, false);
        assert!(!p.get::<bool>(PrefKey::AutoValidate));
        assert!(p.is_set(PrefKey::AutoValidate));

        p.reset(PrefKey::AutoValidate);
        assert!(p.get::<bool>(PrefKey::AutoValidate));
        assert!(!p.is_set(PrefKey::AutoValidate));
    }

    #[test]
    fn test_bool_decoding_is_case_insensitive_and_strict() {
        let mut p = prefs();
        p.put_str("AUTOVALIDATE", "FALSE");
        assert!(!p.get::<bool>(PrefKey::AutoValidate));
        p.put_str("AUTOVALIDATE", "yes");
        assert!(
            p.get::<bool>(PrefKey::AutoValidate),
            "unrecognised text must read as the default"
        );
    }

    #[test]
    fn test_unparseable_long_reads_default() {
        let mut p = prefs();
        p.put_str("CERTIFICATE_SERIALNUMBER", "12x");
        assert_eq!(p.last_certificate_serial(), 4_700_000);
        p.set_last_certificate_serial(4_700_010);
        assert_eq!(p.get_long("CERTIFICATE_SERIALNUMBER", 0), 4_700_010);
    }

    #[test]
    fn test_certificate_default_is_hour_stamp_with_trailing_zero() {
        let p = Preferences::new(
            Box::new(MemoryStore::new()),
            PlatformDefaults::resolve(&HostProfile::default()),
        );
        let serial = p.last_certificate_serial();
        assert_eq!(serial % 10, 0);
        let now_hours = chrono::Utc::now().timestamp_millis() / MILLIS_PER_HOUR;
        assert!((serial / 10 - now_hours).abs() <= 1);
    }

    #[test]
    fn test_legacy_aliases_read_the_sibling_key() {
        let mut p = prefs();
        p.set(PrefKey::CadMaterial, true);
        assert!(
            !p.get::<bool>(PrefKey::CadMaterial),
            "material reads the modify-viewpoint key"
        );
        p.set(PrefKey::CadModifyViewpoint, true);
        assert!(p.get::<bool>(PrefKey::CadMaterial));

        // Unset identity key: appearance keeps its own default, not identity's.
        assert!(!p.get::<bool>(PrefKey::CadAppearanceFilter));
        p.set(PrefKey::CadIdentityFilter, true);
        assert!(p.get::<bool>(PrefKey::CadAppearanceFilter));
    }

    #[test]
    fn test_legacy_aliases_can_be_disabled() {
        let mut p = prefs().with_legacy_read_aliases(false);
        p.set(PrefKey::CadCombineAppearances, true);
        assert!(p.get::<bool>(PrefKey::CadCombineAppearances));
        assert!(!p.get::<bool>(PrefKey::CadCombineShapes));
    }

    #[test]
    fn test_reset_group_only_touches_its_keys() {
        let mut p = prefs();
        p.set(PrefKey::VisualizeLineColorRed, "0.1".to_string());
        p.set(PrefKey::VisualizeTransparency, "0.2".to_string());
        p.set(PrefKey::VisualizeConeLines, "12".to_string());

        p.reset_group(PrefGroup::Visualize);

        assert_eq!(p.visualize_line_color(), "1 0.8 0.0");
        assert_eq!(p.get::<String>(PrefKey::VisualizeTransparency), "0.8");
        assert_eq!(
            p.get::<String>(PrefKey::VisualizeConeLines),
            "12",
            "cone lines are not part of the visualize color group"
        );
    }

    #[test]
    fn test_color_triplets_join_with_spaces() {
        let mut p = prefs();
        assert_eq!(p.visualize_shape_color(), "0.8 0.6 0.0");
        assert_eq!(p.visualize_hanim_joint_color(), "1 0.5 0.0");
        assert_eq!(p.visualize_hanim_segment_color(), "1 1 0.0");
        assert_eq!(p.visualize_hanim_site_color(), "1 0.0 0.0");
        p.set(PrefKey::VisualizeShapeColorGreen, "0.25".to_string());
        assert_eq!(p.visualize_shape_color(), "0.8 0.25 0.0");
    }

    #[test]
    fn test_launch_interval_in_millis() {
        let mut p = prefs();
        assert_eq!(p.launch_interval_millis(), Ok(1_000));
        p.set(PrefKey::LaunchInterval, " 3 ".to_string());
        assert_eq!(p.launch_interval_millis(), Ok(3_000));
        p.set(PrefKey::LaunchInterval, "soon".to_string());
        assert!(matches!(
            p.launch_interval_millis(),
            Err(ValueError::NotInteger { .. })
        ));
    }

    #[test]
    fn test_tool_paths_follow_platform_then_user_override() {
        let mut p = prefs_for("Mac OS X");
        assert_eq!(p.tool_path(Tool::Xj3d), "/Applications/Xj3D/Xj3DBrowser.app");
        p.set_tool_path(Tool::Xj3d, "/opt/xj3d/browser");
        assert_eq!(p.tool_path(Tool::Xj3d), "/opt/xj3d/browser");
        p.reset(Tool::Xj3d.path_key());
        assert_eq!(p.tool_path(Tool::Xj3d), "/Applications/Xj3D/Xj3DBrowser.app");
    }

    #[test]
    fn test_auto_launch_defaults_and_missing_option() {
        let mut p = prefs();
        assert!(p.auto_launch(Tool::Blender));
        assert!(!p.auto_launch(Tool::Heilan));
        assert!(!p.auto_launch(Tool::OtherSceneEditor));

        p.set_auto_launch(Tool::Blender, false);
        assert!(!p.auto_launch(Tool::Blender));
        p.set_auto_launch(Tool::OtherSceneEditor, true);
        assert!(!p.auto_launch(Tool::OtherSceneEditor));
    }

    #[test]
    fn test_user_defined_tool_names() {
        let p = prefs();
        assert_eq!(
            p.tool_name(Tool::OtherX3dPlayer).as_deref(),
            Some("(Add another player using X3D-Edit Preferences)")
        );
        assert_eq!(p.tool_name(Tool::OtherAudioEditor).as_deref(), Some("Other tool"));
        assert_eq!(p.tool_switch(Tool::OtherX3dPlayer).as_deref(), Some(""));
        assert_eq!(p.tool_name(Tool::Gimp), None);
    }

    #[test]
    fn test_dis_settings_merge_over_fallback() {
        let mut p = prefs();
        let fallback = DisSettings {
            address: "239.1.2.3".to_string(),
            port: "3000".to_string(),
            app_id: "1".to_string(),
            entity_id: "2".to_string(),
            site_id: "3".to_string(),
            translation_scale: ["1".to_string(), "1".to_string(), "1".to_string()],
        };
        assert_eq!(p.dis_settings(&fallback), fallback);

        let mut stored = fallback.clone();
        stored.port = "62040".to_string();
        stored.translation_scale[2] = "0.5".to_string();
        p.set_dis_settings(&stored);
        assert_eq!(p.dis_settings(&fallback), stored);
    }

    #[test]
    fn test_raw_access_uses_java_style_defaults() {
        let mut p = prefs().with_namespace("org/web3d/x3d/test");
        assert!(p.get_bool("SOME_FLAG", true));
        assert_eq!(p.get_str("SOME_TEXT", "fallback"), "fallback");

        p.put_bool("SOME_FLAG", false);
        p.put_long("SOME_COUNT", 42);
        assert!(!p.get_bool("SOME_FLAG", true));
        assert_eq!(p.get_long("SOME_COUNT", 0), 42);
        assert_eq!(p.stored_keys(), vec!["SOME_COUNT", "SOME_FLAG"]);

        assert!(p.remove("SOME_COUNT"));
        assert!(!p.remove("SOME_COUNT"));
        assert_eq!(p.get_long("SOME_COUNT", 7), 7);
    }

    #[test]
    fn test_namespace_scopes_raw_access() {
        let mut store = MemoryStore::new();
        store.put("org/other", "AUTOVALIDATE", "false".to_string());
        let p = Preferences::new(
            Box::new(store),
            PlatformDefaults::resolve(&HostProfile::default()),
        );
        assert!(p.get::<bool>(PrefKey::AutoValidate));
        assert!(p.stored_keys().is_empty());
    }
}
