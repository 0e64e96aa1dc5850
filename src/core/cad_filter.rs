// X3dPrefs - core/cad_filter.rs
//
// View-model of the CAD filter options form.
//
// The form holds an editable copy of the 29 CAD filter preferences. `load`
// fills it from the registry, `save` writes it back under the shared
// partial-commit policy, and `reset_all` clears the whole group. The
// identity / CAD-filters radio pair only changes which controls are
// enabled; it persists nothing until the form is saved.

use super::form::{ComboField, DialogHost, NumberRule, SaveReport};
use super::keys::{PrefGroup, PrefKey};
use super::registry::Preferences;
use crate::util::constants::{CAD_COMPRESSION_CHOICES, CAD_LOG_LEVEL_CHOICES, CAD_VERSION_CHOICES};
use std::collections::BTreeMap;

/// Label of the scale factor field, also used in error reports.
pub const SCALE_FACTOR_LABEL: &str = "Absolute scale factor";

/// Label of the quantization field, also used in error reports.
pub const QUANTIZATION_LABEL: &str = "Floating-point quantization";

/// The radio pair choosing between pass-through and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// Copy the scene through unchanged.
    Identity,
    /// Apply the selected CAD filters.
    CadFilters,
}

/// One checkbox of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CadToggle {
    TriangleCount,
    EmbedProto,
    MinimumProfile,
    Debug,
    Reindex,
    BoundingBoxes,
    Appearance,
    Center,
    CombineAppearances,
    CombineShapes,
    ShortenDef,
    DefUseImageTexture,
    FlattenTransform,
    FlattenTextureTransform,
    FlattenSelectable,
    GenerateNormals,
    Index,
    IfsToIts,
    IfsToTs,
    Material,
    ModifyViewpoint,
    Triangulation,
}

impl CadToggle {
    pub const ALL: [CadToggle; 22] = [
        Self::TriangleCount,
        Self::EmbedProto,
        Self::MinimumProfile,
        Self::Debug,
        Self::Reindex,
        Self::BoundingBoxes,
        Self::Appearance,
        Self::Center,
        Self::CombineAppearances,
        Self::CombineShapes,
        Self::ShortenDef,
        Self::DefUseImageTexture,
        Self::FlattenTransform,
        Self::FlattenTextureTransform,
        Self::FlattenSelectable,
        Self::GenerateNormals,
        Self::Index,
        Self::IfsToIts,
        Self::IfsToTs,
        Self::Material,
        Self::ModifyViewpoint,
        Self::Triangulation,
    ];

    pub fn key(self) -> PrefKey {
        use PrefKey as K;
        match self {
            Self::TriangleCount => K::CadTriangleCount,
            Self::EmbedProto => K::CadEmbedProto,
            Self::MinimumProfile => K::CadMinimumProfile,
            Self::Debug => K::CadDebug,
            Self::Reindex => K::CadReindex,
            Self::BoundingBoxes => K::CadBoundingBoxes,
            Self::Appearance => K::CadAppearanceFilter,
            Self::Center => K::CadCenter,
            Self::CombineAppearances => K::CadCombineAppearances,
            Self::CombineShapes => K::CadCombineShapes,
            Self::ShortenDef => K::CadShortenDef,
            Self::DefUseImageTexture => K::CadDefUseImageTexture,
            Self::FlattenTransform => K::CadFlattenTransform,
            Self::FlattenTextureTransform => K::CadFlattenTextureTransform,
            Self::FlattenSelectable => K::CadFlattenSelectable,
            Self::GenerateNormals => K::CadGenerateNormals,
            Self::Index => K::CadIndex,
            Self::IfsToIts => K::CadIfsToIts,
            Self::IfsToTs => K::CadIfsToTs,
            Self::Material => K::CadMaterial,
            Self::ModifyViewpoint => K::CadModifyViewpoint,
            Self::Triangulation => K::CadTriangulation,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::TriangleCount => "Report triangle count",
            Self::EmbedProto => "Embed prototypes",
            Self::MinimumProfile => "Minimum profile",
            Self::Debug => "Debug output",
            Self::Reindex => "Reindex",
            Self::BoundingBoxes => "Add bounding boxes",
            Self::Appearance => "Appearance filter",
            Self::Center => "Center",
            Self::CombineAppearances => "Combine appearances",
            Self::CombineShapes => "Combine shapes",
            Self::ShortenDef => "Shorten DEF names",
            Self::DefUseImageTexture => "DEF/USE image textures",
            Self::FlattenTransform => "Flatten transforms",
            Self::FlattenTextureTransform => "Flatten texture transforms",
            Self::FlattenSelectable => "Flatten selectable",
            Self::GenerateNormals => "Generate normals",
            Self::Index => "Index",
            Self::IfsToIts => "IndexedFaceSet to IndexedTriangleSet",
            Self::IfsToTs => "IndexedFaceSet to TriangleSet",
            Self::Material => "Material filter",
            Self::ModifyViewpoint => "Modify viewpoint",
            Self::Triangulation => "Triangulation",
        }
    }

    /// Filter checkboxes are disabled while identity mode is selected;
    /// output options stay enabled in both modes.
    pub fn is_gated(self) -> bool {
        !matches!(
            self,
            Self::TriangleCount
                | Self::EmbedProto
                | Self::MinimumProfile
                | Self::Debug
                | Self::Reindex
        )
    }
}

/// Editable state of the CAD filter form.
#[derive(Debug, Clone, PartialEq)]
pub struct CadFilterForm {
    pub x3d_version: ComboField,
    pub log_level: ComboField,
    pub binary_compression: ComboField,
    pub abs_scale_factor: String,
    pub float_quantization: String,
    toggles: BTreeMap<CadToggle, bool>,
    mode: FilterMode,
}

impl CadFilterForm {
    /// Populate every control from the registry.
    pub fn load(prefs: &Preferences) -> Self {
        let toggles = CadToggle::ALL
            .iter()
            .map(|&t| (t, prefs.get::<bool>(t.key())))
            .collect();

        let mode = if prefs.get::<bool>(PrefKey::CadFiltersEnabled) {
            FilterMode::CadFilters
        } else {
            FilterMode::Identity
        };

        Self {
            x3d_version: ComboField::new(CAD_VERSION_CHOICES)
                .with_value(&prefs.get::<String>(PrefKey::CadX3dVersion)),
            log_level: ComboField::new(CAD_LOG_LEVEL_CHOICES)
                .with_value(&prefs.get::<String>(PrefKey::CadLogLevel)),
            binary_compression: ComboField::new(CAD_COMPRESSION_CHOICES)
                .with_value(&prefs.get::<String>(PrefKey::CadBinaryCompression)),
            abs_scale_factor: prefs.get(PrefKey::CadAbsScaleFactor),
            float_quantization: prefs.get(PrefKey::CadFloatQuantization),
            toggles,
            mode,
        }
    }

    /// Write the form back to the registry.
    ///
    /// Numeric fields are validated first and committed individually; every
    /// other control is always written. If any numeric field was rejected,
    /// `host` shows one error dialog listing them all.
    pub fn save(&self, prefs: &mut Preferences, host: &mut dyn DialogHost) -> SaveReport {
        let report = self.commit(prefs);
        report.notify(host);
        report
    }

    /// Write the form back without showing any dialog.
    pub(crate) fn commit(&self, prefs: &mut Preferences) -> SaveReport {
        let mut report = SaveReport::new();
        report.commit_number(
            prefs,
            PrefKey::CadAbsScaleFactor,
            SCALE_FACTOR_LABEL,
            &self.abs_scale_factor,
            NumberRule::Float,
        );
        report.commit_number(
            prefs,
            PrefKey::CadFloatQuantization,
            QUANTIZATION_LABEL,
            &self.float_quantization,
            NumberRule::Float,
        );

        prefs.set(PrefKey::CadIdentityFilter, self.mode == FilterMode::Identity);
        prefs.set(PrefKey::CadFiltersEnabled, self.mode == FilterMode::CadFilters);

        for (&toggle, &on) in &self.toggles {
            prefs.set(toggle.key(), on);
        }

        prefs.set(PrefKey::CadX3dVersion, self.x3d_version.value().to_string());
        prefs.set(PrefKey::CadLogLevel, self.log_level.value().to_string());
        prefs.set(
            PrefKey::CadBinaryCompression,
            self.binary_compression.value().to_string(),
        );

        tracing::info!(
            mode = ?self.mode,
            rejected = report.rejected_labels().len(),
            "CAD filter options saved"
        );
        report
    }

    /// Clear every CAD filter preference and reload the defaults.
    pub fn reset_all(&mut self, prefs: &mut Preferences) {
        prefs.reset_group(PrefGroup::CadFilter);
        *self = Self::load(prefs);
    }

    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    /// Select a radio button. Only the enabled state of controls changes.
    pub fn set_mode(&mut self, mode: FilterMode) {
        if self.mode != mode {
            tracing::debug!(?mode, "CAD filter mode changed");
        }
        self.mode = mode;
    }

    pub fn toggle(&self, toggle: CadToggle) -> bool {
        self.toggles.get(&toggle).copied().unwrap_or(false)
    }

    pub fn set_toggle(&mut self, toggle: CadToggle, on: bool) {
        self.toggles.insert(toggle, on);
    }

    /// Mutable handle for checkbox widgets.
    pub fn toggle_mut(&mut self, toggle: CadToggle) -> &mut bool {
        self.toggles.entry(toggle).or_insert(false)
    }

    /// Whether `toggle` accepts input in the current mode.
    pub fn is_toggle_enabled(&self, toggle: CadToggle) -> bool {
        !toggle.is_gated() || self.mode == FilterMode::CadFilters
    }

    /// Whether the scale and quantization fields (and their labels) accept input.
    pub fn numeric_fields_enabled(&self) -> bool {
        self.mode == FilterMode::CadFilters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::defaults::{HostProfile, PlatformDefaults};
    use crate::core::keys::CAD_FILTER_KEYS;
    use crate::core::store::MemoryStore;

    #[derive(Default)]
    struct Recorder(Vec<String>);

    impl DialogHost for Recorder {
        fn show_error(&mut self, _title: &str, message: &str) {
            self.0.push(message.to_string());
        }
    }

    fn prefs() -> Preferences {
        Preferences::new(
            Box::new(MemoryStore::new()),
            PlatformDefaults::resolve(&HostProfile::default()),
        )
    }

    #[test]
    fn test_load_defaults() {
        let form = CadFilterForm::load(&prefs());
        assert_eq!(form.mode(), FilterMode::Identity);
        assert_eq!(form.x3d_version.value(), "3.2");
        assert_eq!(form.log_level.value(), "ALL");
        assert_eq!(form.binary_compression.value(), "SMALLEST");
        assert_eq!(form.abs_scale_factor, "1.0");
        assert_eq!(form.float_quantization, "0.001");
        assert!(CadToggle::ALL.iter().all(|&t| !form.toggle(t)));
    }

    #[test]
    fn test_gating_follows_mode_without_persisting() {
        let mut p = prefs();
        let mut form = CadFilterForm::load(&p);

        let gated = CadToggle::ALL.iter().filter(|t| t.is_gated()).count();
        assert_eq!(gated, 17);
        assert!(!form.numeric_fields_enabled());
        assert!(!form.is_toggle_enabled(CadToggle::Triangulation));
        assert!(form.is_toggle_enabled(CadToggle::TriangleCount));

        form.set_mode(FilterMode::CadFilters);
        assert!(form.numeric_fields_enabled());
        assert!(CadToggle::ALL.iter().all(|&t| form.is_toggle_enabled(t)));
        assert!(!p.get::<bool>(PrefKey::CadFiltersEnabled));

        form.save(&mut p, &mut Recorder::default());
        assert!(p.get::<bool>(PrefKey::CadFiltersEnabled));
        assert!(!p.get::<bool>(PrefKey::CadIdentityFilter));
        assert_eq!(CadFilterForm::load(&p).mode(), FilterMode::CadFilters);
    }

    #[test]
    fn test_save_round_trips_combos_and_toggles() {
        let mut p = prefs().with_legacy_read_aliases(false);
        let mut form = CadFilterForm::load(&p);
        form.x3d_version.select_value("4.0");
        form.log_level.select_value("ERRORS");
        form.set_toggle(CadToggle::GenerateNormals, true);
        form.set_toggle(CadToggle::Material, true);

        let report = form.save(&mut p, &mut Recorder::default());
        assert!(report.is_clean());

        let reloaded = CadFilterForm::load(&p);
        assert_eq!(reloaded.x3d_version.value(), "4.0");
        assert_eq!(reloaded.log_level.value(), "ERRORS");
        assert!(reloaded.toggle(CadToggle::GenerateNormals));
        assert!(reloaded.toggle(CadToggle::Material));
    }

    #[test]
    fn test_partial_commit_keeps_prior_invalid_field_value() {
        let mut p = prefs();
        p.set(PrefKey::CadAbsScaleFactor, "2.5".to_string());

        let mut form = CadFilterForm::load(&p);
        form.abs_scale_factor = "abc".to_string();
        form.float_quantization = " 0.01 ".to_string();
        form.set_toggle(CadToggle::Triangulation, true);

        let mut host = Recorder::default();
        let report = form.save(&mut p, &mut host);

        assert_eq!(report.rejected_labels(), vec![SCALE_FACTOR_LABEL]);
        assert_eq!(p.get::<String>(PrefKey::CadAbsScaleFactor), "2.5");
        assert_eq!(p.get::<String>(PrefKey::CadFloatQuantization), "0.01");
        assert!(p.get::<bool>(PrefKey::CadTriangulation));
        assert_eq!(host.0.len(), 1);
        assert!(host.0[0].contains(SCALE_FACTOR_LABEL));
        assert!(!host.0[0].contains(QUANTIZATION_LABEL));
    }

    #[test]
    fn test_both_numeric_fields_invalid_still_one_dialog() {
        let mut p = prefs();
        let mut form = CadFilterForm::load(&p);
        form.abs_scale_factor = "x".to_string();
        form.float_quantization = "y".to_string();

        let mut host = Recorder::default();
        let report = form.save(&mut p, &mut host);

        assert_eq!(
            report.rejected_labels(),
            vec![SCALE_FACTOR_LABEL, QUANTIZATION_LABEL]
        );
        assert_eq!(host.0.len(), 1);
    }

    #[test]
    fn test_reset_all_clears_every_cad_key() {
        let mut p = prefs();
        let mut form = CadFilterForm::load(&p);
        form.set_mode(FilterMode::CadFilters);
        form.abs_scale_factor = "3".to_string();
        for t in CadToggle::ALL {
            form.set_toggle(t, true);
        }
        form.log_level.select_value("NONE");
        form.save(&mut p, &mut Recorder::default());
        assert!(CAD_FILTER_KEYS.iter().any(|&k| p.is_set(k)));

        form.reset_all(&mut p);

        assert!(CAD_FILTER_KEYS.iter().all(|&k| !p.is_set(k)));
        assert_eq!(form, CadFilterForm::load(&prefs()));
    }
}
