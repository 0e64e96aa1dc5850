// X3dPrefs - core/misc_options.rs
//
// View-model of the miscellaneous options form: newline handling,
// auto-validation, and the visualization colors used when previewing
// scenes and HAnim skeletons.

use super::form::{DialogHost, NumberRule, SaveReport};
use super::keys::{PrefGroup, PrefKey};
use super::registry::Preferences;

/// One "r g b" color edited as three text fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorFields {
    pub rgb: [String; 3],
}

impl ColorFields {
    fn load(prefs: &Preferences, keys: [PrefKey; 3]) -> Self {
        Self {
            rgb: keys.map(|k| prefs.get::<String>(k)),
        }
    }

    fn commit(&self, prefs: &mut Preferences, keys: [PrefKey; 3], name: &str, report: &mut SaveReport) {
        for ((key, text), channel) in keys.iter().zip(&self.rgb).zip(["red", "green", "blue"]) {
            let label = format!("{name} {channel}");
            report.commit_number(prefs, *key, &label, text, NumberRule::Float);
        }
    }
}

const LINE_COLOR: [PrefKey; 3] = [
    PrefKey::VisualizeLineColorRed,
    PrefKey::VisualizeLineColorGreen,
    PrefKey::VisualizeLineColorBlue,
];
const SHAPE_COLOR: [PrefKey; 3] = [
    PrefKey::VisualizeShapeColorRed,
    PrefKey::VisualizeShapeColorGreen,
    PrefKey::VisualizeShapeColorBlue,
];
const JOINT_COLOR: [PrefKey; 3] = [
    PrefKey::VisualizeHanimJointColorRed,
    PrefKey::VisualizeHanimJointColorGreen,
    PrefKey::VisualizeHanimJointColorBlue,
];
const SEGMENT_COLOR: [PrefKey; 3] = [
    PrefKey::VisualizeHanimSegmentColorRed,
    PrefKey::VisualizeHanimSegmentColorGreen,
    PrefKey::VisualizeHanimSegmentColorBlue,
];
const SITE_COLOR: [PrefKey; 3] = [
    PrefKey::VisualizeHanimSiteColorRed,
    PrefKey::VisualizeHanimSiteColorGreen,
    PrefKey::VisualizeHanimSiteColorBlue,
];

/// Newline handling and validation switches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewlineFields {
    pub show_option: bool,
    pub prepend: bool,
    pub append: bool,
}

/// Scene visualization settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisualizeFields {
    pub coordinate_axes: bool,
    pub center_line: bool,
    pub cone_lines: String,
    pub line_color: ColorFields,
    pub shape_color: ColorFields,
    pub transparency: String,
}

/// HAnim skeleton visualization settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HanimFields {
    pub coordinate_axes: bool,
    pub joint_color: ColorFields,
    pub segment_color: ColorFields,
    pub site_color: ColorFields,
}

/// Editable state of the miscellaneous options form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MiscOptionsForm {
    pub newline: NewlineFields,
    pub auto_validate: bool,
    pub visualize: VisualizeFields,
    pub hanim: HanimFields,
}

impl MiscOptionsForm {
    pub fn load(prefs: &Preferences) -> Self {
        Self {
            newline: load_newline(prefs),
            auto_validate: prefs.get(PrefKey::AutoValidate),
            visualize: load_visualize(prefs),
            hanim: load_hanim(prefs),
        }
    }

    /// Write the form back, reporting any rejected numeric fields once.
    pub fn save(&self, prefs: &mut Preferences, host: &mut dyn DialogHost) -> SaveReport {
        let report = self.commit(prefs);
        report.notify(host);
        report
    }

    pub(crate) fn commit(&self, prefs: &mut Preferences) -> SaveReport {
        let mut report = SaveReport::new();

        prefs.set(PrefKey::ShowNewlineOption, self.newline.show_option);
        prefs.set(PrefKey::PrependNewline, self.newline.prepend);
        prefs.set(PrefKey::AppendNewline, self.newline.append);
        prefs.set(PrefKey::AutoValidate, self.auto_validate);

        let vis = &self.visualize;
        prefs.set(PrefKey::VisualizeCoordinateAxes, vis.coordinate_axes);
        prefs.set(PrefKey::VisualizeCenterLine, vis.center_line);
        report.commit_number(
            prefs,
            PrefKey::VisualizeConeLines,
            "Cone lines",
            &vis.cone_lines,
            NumberRule::Count,
        );
        vis.line_color.commit(prefs, LINE_COLOR, "Line color", &mut report);
        vis.shape_color.commit(prefs, SHAPE_COLOR, "Shape color", &mut report);
        report.commit_number(
            prefs,
            PrefKey::VisualizeTransparency,
            "Transparency",
            &vis.transparency,
            NumberRule::Float,
        );

        let hanim = &self.hanim;
        prefs.set(PrefKey::VisualizeHanimCoordinateAxes, hanim.coordinate_axes);
        hanim.joint_color.commit(prefs, JOINT_COLOR, "HAnim joint color", &mut report);
        hanim.segment_color.commit(prefs, SEGMENT_COLOR, "HAnim segment color", &mut report);
        hanim.site_color.commit(prefs, SITE_COLOR, "HAnim site color", &mut report);

        tracing::info!(rejected = report.rejected_labels().len(), "Miscellaneous options saved");
        report
    }

    /// Reset line color, shape color, and transparency.
    pub fn reset_visualize(&mut self, prefs: &mut Preferences) {
        prefs.reset_group(PrefGroup::Visualize);
        let fresh = load_visualize(prefs);
        self.visualize.line_color = fresh.line_color;
        self.visualize.shape_color = fresh.shape_color;
        self.visualize.transparency = fresh.transparency;
    }

    /// Reset the three HAnim colors.
    pub fn reset_hanim(&mut self, prefs: &mut Preferences) {
        prefs.reset_group(PrefGroup::VisualizeHanim);
        let fresh = load_hanim(prefs);
        self.hanim.joint_color = fresh.joint_color;
        self.hanim.segment_color = fresh.segment_color;
        self.hanim.site_color = fresh.site_color;
    }

    pub fn reset_newline(&mut self, prefs: &mut Preferences) {
        prefs.reset_group(PrefGroup::Newline);
        self.newline = load_newline(prefs);
    }
}

fn load_newline(prefs: &Preferences) -> NewlineFields {
    NewlineFields {
        show_option: prefs.get(PrefKey::ShowNewlineOption),
        prepend: prefs.get(PrefKey::PrependNewline),
        append: prefs.get(PrefKey::AppendNewline),
    }
}

fn load_visualize(prefs: &Preferences) -> VisualizeFields {
    VisualizeFields {
        coordinate_axes: prefs.get(PrefKey::VisualizeCoordinateAxes),
        center_line: prefs.get(PrefKey::VisualizeCenterLine),
        cone_lines: prefs.get(PrefKey::VisualizeConeLines),
        line_color: ColorFields::load(prefs, LINE_COLOR),
        shape_color: ColorFields::load(prefs, SHAPE_COLOR),
        transparency: prefs.get(PrefKey::VisualizeTransparency),
    }
}

fn load_hanim(prefs: &Preferences) -> HanimFields {
    HanimFields {
        coordinate_axes: prefs.get(PrefKey::VisualizeHanimCoordinateAxes),
        joint_color: ColorFields::load(prefs, JOINT_COLOR),
        segment_color: ColorFields::load(prefs, SEGMENT_COLOR),
        site_color: ColorFields::load(prefs, SITE_COLOR),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::defaults::{HostProfile, PlatformDefaults};
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
    fn test_load_reads_defaults() {
        let form = MiscOptionsForm::load(&prefs());
        assert!(form.newline.prepend);
        assert!(!form.newline.append);
        assert!(form.auto_validate);
        assert_eq!(form.visualize.cone_lines, "8");
        assert_eq!(form.visualize.line_color.rgb, ["1", "0.8", "0.0"]);
        assert_eq!(form.hanim.site_color.rgb, ["1", "0.0", "0.0"]);
    }

    #[test]
    fn test_save_commits_valid_fields_and_names_invalid_ones() {
        let mut p = prefs();
        let mut form = MiscOptionsForm::load(&p);
        form.auto_validate = false;
        form.visualize.cone_lines = "4.5".to_string();
        form.visualize.shape_color.rgb[1] = "0.3".to_string();
        form.hanim.joint_color.rgb[0] = "red".to_string();

        let mut host = Recorder::default();
        let report = form.save(&mut p, &mut host);

        assert_eq!(report.rejected_labels(), vec!["Cone lines", "HAnim joint color red"]);
        assert_eq!(host.0.len(), 1);
        assert!(!p.get::<bool>(PrefKey::AutoValidate));
        assert_eq!(p.visualize_shape_color(), "0.8 0.3 0.0");
        assert!(!p.is_set(PrefKey::VisualizeConeLines));
        assert!(!p.is_set(PrefKey::VisualizeHanimJointColorRed));
    }

    #[test]
    fn test_reset_visualize_reloads_only_its_group() {
        let mut p = prefs();
        let mut form = MiscOptionsForm::load(&p);
        form.visualize.line_color.rgb[0] = "0.5".to_string();
        form.visualize.cone_lines = "16".to_string();
        form.hanim.site_color.rgb[2] = "0.9".to_string();
        form.save(&mut p, &mut Recorder::default());

        form.reset_visualize(&mut p);

        assert_eq!(form.visualize.line_color.rgb[0], "1");
        assert_eq!(form.visualize.cone_lines, "16");
        assert_eq!(form.hanim.site_color.rgb[2], "0.9");
        assert_eq!(p.visualize_hanim_site_color(), "1 0.0 0.9");
    }

    #[test]
    fn test_reset_hanim_and_newline() {
        let mut p = prefs();
        let mut form = MiscOptionsForm::load(&p);
        form.hanim.segment_color.rgb = ["0".into(), "0".into(), "0".into()];
        form.newline.append = true;
        form.save(&mut p, &mut Recorder::default());

        form.reset_hanim(&mut p);
        assert_eq!(p.visualize_hanim_segment_color(), "1 1 0.0");
        assert_eq!(form.hanim.segment_color.rgb, ["1", "1", "0.0"]);
        assert!(form.newline.append);

        form.reset_newline(&mut p);
        assert!(!form.newline.append);
        assert!(!p.get::<bool>(PrefKey::AppendNewline));
    }
}
