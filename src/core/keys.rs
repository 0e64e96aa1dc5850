// X3dPrefs - core/keys.rs
//
// Preference identifiers.
//
// Every persisted option is a `PrefKey` variant. The `pref_keys!` table
// below maps each variant to its stable storage string, its value kind,
// and its default. Storage strings must never change: files written by
// earlier releases and the external CAD filter tool both read them.

use super::defaults::Tool;

/// Shape of a stored value. All values are persisted as strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefKind {
    Text,
    Bool,
    Long,
}

/// Where a key's default comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultSource {
    /// Fixed boolean.
    Flag(bool),
    /// Fixed text.
    Text(&'static str),
    /// Executable path from the platform default table.
    ToolPath(Tool),
    /// No built-in default; every read supplies one.
    CallerSupplied,
    /// Hour-resolution timestamp, computed when the registry is built.
    CertificateSerial,
}

const fn flag(value: bool) -> DefaultSource {
    DefaultSource::Flag(value)
}

const fn text(value: &'static str) -> DefaultSource {
    DefaultSource::Text(value)
}

const fn path(tool: Tool) -> DefaultSource {
    DefaultSource::ToolPath(tool)
}

const CALLER: DefaultSource = DefaultSource::CallerSupplied;

const AUTO: DefaultSource = DefaultSource::Flag(true);

const OTHER_PLAYER_NAME: &str = "(Add another player using X3D-Edit Preferences)";
const OTHER_EDITOR_NAME: &str = "(Add another authoring tool using X3D-Edit Preferences)";
const OTHER_TOOL_NAME: &str = "Other tool";

macro_rules! pref_keys {
    ($( $variant:ident = $key:literal : $kind:ident => $default:expr, )*) => {
        /// Identifier of one persisted preference.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum PrefKey {
            $( $variant, )*
        }

        impl PrefKey {
            /// Every key, in table order.
            pub const ALL: &'static [PrefKey] = &[ $( PrefKey::$variant, )* ];

            /// Stable storage key.
            pub const fn key(self) -> &'static str {
                match self {
                    $( PrefKey::$variant => $key, )*
                }
            }

            pub const fn kind(self) -> PrefKind {
                match self {
                    $( PrefKey::$variant => PrefKind::$kind, )*
                }
            }

            pub const fn default_source(self) -> DefaultSource {
                match self {
                    $( PrefKey::$variant => $default, )*
                }
            }
        }
    };
}

pref_keys! {
    // -- Editing ----------------------------------------------------------
    ShowNewlineOption = "SHOW_NEWLINE_OPTION" : Bool => flag(false),
    PrependNewline = "PREPEND_NEWLINE" : Bool => flag(true),
    AppendNewline = "APPEND_NEWLINE" : Bool => flag(false),
    AutoValidate = "AUTOVALIDATE" : Bool => flag(true),

    // -- Visualization ----------------------------------------------------
    VisualizeCoordinateAxes = "VISUALIZE_COORDINATE_AXES" : Bool => flag(true),
    VisualizeCenterLine = "VISUALIZE_CENTER_LINE" : Bool => flag(true),
    VisualizeConeLines = "VISUALIZE_CONE_LINES" : Text => text("8"),
    VisualizeLineColorRed = "VISUALIZE_LINECOLOR_RED" : Text => text("1"),
    VisualizeLineColorGreen = "VISUALIZE_LINECOLOR_GREEN" : Text => text("0.8"),
    VisualizeLineColorBlue = "VISUALIZE_LINECOLOR_BLUE" : Text => text("0.0"),
    VisualizeShapeColorRed = "VISUALIZE_SHAPECOLOR_RED" : Text => text("0.8"),
    VisualizeShapeColorGreen = "VISUALIZE_SHAPECOLOR_GREEN" : Text => text("0.6"),
    VisualizeShapeColorBlue = "VISUALIZE_SHAPECOLOR_BLUE" : Text => text("0.0"),
    VisualizeTransparency = "VISUALIZE_TRANSPARENCY" : Text => text("0.8"),

    VisualizeHanimCoordinateAxes = "VISUALIZE_HANIM_COORDINATE_AXES" : Bool => flag(false),
    VisualizeHanimJointColorRed = "VISUALIZE_HANIMJOINTCOLOR_RED" : Text => text("1"),
    VisualizeHanimJointColorGreen = "VISUALIZE_HANIMJOINTCOLOR_GREEN" : Text => text("0.5"),
    VisualizeHanimJointColorBlue = "VISUALIZE_HANIMJOINTCOLOR_BLUE" : Text => text("0.0"),
    VisualizeHanimSegmentColorRed = "VISUALIZE_HANIMSEGMENTCOLOR_RED" : Text => text("1"),
    VisualizeHanimSegmentColorGreen = "VISUALIZE_HANIMSEGMENTCOLOR_GREEN" : Text => text("1"),
    VisualizeHanimSegmentColorBlue = "VISUALIZE_HANIMSEGMENTCOLOR_BLUE" : Text => text("0.0"),
    VisualizeHanimSiteColorRed = "VISUALIZE_HANIMSITECOLOR_RED" : Text => text("1"),
    VisualizeHanimSiteColorGreen = "VISUALIZE_HANIMSITECOLOR_GREEN" : Text => text("0.0"),
    VisualizeHanimSiteColorBlue = "VISUALIZE_HANIMSITECOLOR_BLUE" : Text => text("0.0"),

    // -- X3D players ------------------------------------------------------
    ContactPath = "CONTACT_EXECUTABLE_PATH" : Text => path(Tool::Contact),
    ContactGeoPath = "CONTACT_GEO_EXECUTABLE_PATH" : Text => path(Tool::ContactGeo),
    FreeWrlPath = "FREEWRL_EXECUTABLE_PATH" : Text => path(Tool::FreeWrl),
    H3dPath = "H3D_EXECUTABLE_PATH" : Text => path(Tool::H3d),
    HeilanPath = "HEILAN_EXECUTABLE_PATH" : Text => path(Tool::Heilan),
    InstantRealityPath = "INSTANTREALITY_EXECUTABLE_PATH" : Text => path(Tool::InstantReality),
    OctagaPath = "OCTAGA_EXECUTABLE_PATH" : Text => path(Tool::Octaga),
    SwirlX3dPath = "SWIRLX3DPLAYER_EXECUTABLE_PATH" : Text => path(Tool::SwirlX3d),
    View3dScenePath = "VIEW3DSCENE_EXECUTABLE_PATH" : Text => path(Tool::View3dScene),
    VivatyPath = "VIVATYPLAYER_EXECUTABLE_PATH" : Text => path(Tool::Vivaty),
    Xj3dPath = "XJ3D_EXECUTABLE_PATH" : Text => path(Tool::Xj3d),
    OtherX3dPlayerName = "OTHER_X3D_PLAYER_EXECUTABLE_NAME" : Text => text(OTHER_PLAYER_NAME),
    OtherX3dPlayerPath = "OTHER_X3D_PLAYER_EXECUTABLE_PATH" : Text => path(Tool::OtherX3dPlayer),
    OtherX3dPlayerSwitch = "OTHER_X3D_PLAYER_EXECUTABLE_SWITCH" : Text => text(""),
    OtherX3dEditorName = "OTHER_X3D_EDITOR_EXECUTABLE_NAME" : Text => text(OTHER_EDITOR_NAME),
    OtherX3dEditorPath = "OTHER_X3D_EDITOR_EXECUTABLE_PATH" : Text => path(Tool::OtherX3dEditor),
    LaunchInterval = "LAUNCH_INTERVAL" : Text => text("1"),

    // -- Auto-launch ------------------------------------------------------
    ContactAutoLaunch = "CONTACT_AUTOLAUNCH" : Bool => AUTO,
    ContactGeoAutoLaunch = "CONTACT_GEO_AUTOLAUNCH" : Bool => AUTO,
    FreeWrlAutoLaunch = "FREEWRL_AUTOLAUNCH" : Bool => AUTO,
    H3dAutoLaunch = "H3D_AUTOLAUNCH" : Bool => AUTO,
    HeilanAutoLaunch = "HEILAN_AUTOLAUNCH" : Bool => flag(false),
    InstantRealityAutoLaunch = "INSTANTREALITY_AUTOLAUNCH" : Bool => AUTO,
    OctagaAutoLaunch = "OCTAGA_AUTOLAUNCH" : Bool => AUTO,
    SwirlX3dAutoLaunch = "SWIRLX3DPLAYER_AUTOLAUNCH" : Bool => AUTO,
    View3dSceneAutoLaunch = "VIEW3DSCENE_AUTOLAUNCH" : Bool => AUTO,
    VivatyAutoLaunch = "VIVATYPLAYER_AUTOLAUNCH" : Bool => AUTO,
    Xj3dAutoLaunch = "XJ3D_AUTOLAUNCH" : Bool => AUTO,
    OtherX3dPlayerAutoLaunch = "OTHER_X3D_PLAYER_AUTOLAUNCH" : Bool => AUTO,
    OtherX3dEditorAutoLaunch = "OTHER_X3D_EDITOR_AUTOLAUNCH" : Bool => AUTO,
    AmayaAutoLaunch = "AMAYA_AUTOLAUNCH" : Bool => AUTO,
    AudacityAutoLaunch = "AUDACITY_AUTOLAUNCH" : Bool => AUTO,
    MuseScoreAutoLaunch = "MUSESCORE_AUTOLAUNCH" : Bool => AUTO,
    GimpAutoLaunch = "GIMP_AUTOLAUNCH" : Bool => AUTO,
    FijiAutoLaunch = "FIJI_AUTOLAUNCH" : Bool => AUTO,
    ImageJAutoLaunch = "IMAGEJ_AUTOLAUNCH" : Bool => AUTO,
    ImageMagickAutoLaunch = "IMAGEMAGICK_AUTOLAUNCH" : Bool => AUTO,
    VlcAutoLaunch = "VLC_AUTOLAUNCH" : Bool => AUTO,
    BlenderAutoLaunch = "BLENDER_AUTOLAUNCH" : Bool => AUTO,
    BsContentStudioAutoLaunch = "BSCONTENTSTUDIO_AUTOLAUNCH" : Bool => AUTO,
    CuraAutoLaunch = "CURA_AUTOLAUNCH" : Bool => AUTO,
    MeshLabAutoLaunch = "MESHLAB_AUTOLAUNCH" : Bool => AUTO,
    ParaviewAutoLaunch = "PARAVIEW_AUTOLAUNCH" : Bool => AUTO,
    PolyTransNuGrafAutoLaunch = "POLYTRANSNUGRAF_AUTOLAUNCH" : Bool => AUTO,
    Seamless3dAutoLaunch = "SEAMLESS3D_AUTOLAUNCH" : Bool => AUTO,
    ItksnapAutoLaunch = "ITKSNAP_AUTOLAUNCH" : Bool => AUTO,
    Seg3dAutoLaunch = "SEG3D_AUTOLAUNCH" : Bool => AUTO,
    Slicer3dAutoLaunch = "SLICER3D_AUTOLAUNCH" : Bool => AUTO,
    SvgEditAutoLaunch = "SVG_EDIT_AUTOLAUNCH" : Bool => AUTO,
    WhiteDuneAutoLaunch = "WHITEDUNE_AUTOLAUNCH" : Bool => AUTO,
    Wings3dAutoLaunch = "WINGS3D_AUTOLAUNCH" : Bool => AUTO,
    UltraEditAutoLaunch = "ULTRAEDIT_AUTOLAUNCH" : Bool => AUTO,
    OtherAudioEditorAutoLaunch = "OTHER_AUDIO_EDITOR_AUTOLAUNCH" : Bool => AUTO,
    OtherHtml5EditorAutoLaunch = "OTHER_HTML5_EDITOR_AUTOLAUNCH" : Bool => AUTO,
    OtherImageEditorAutoLaunch = "OTHER_IMAGE_EDITOR_AUTOLAUNCH" : Bool => AUTO,
    OtherVideoEditorAutoLaunch = "OTHER_VIDEO_EDITOR_AUTOLAUNCH" : Bool => AUTO,
    OtherVolumeEditorAutoLaunch = "OTHER_VOLUME_EDITOR_AUTOLAUNCH" : Bool => AUTO,

    // -- Authoring tools --------------------------------------------------
    AmayaPath = "AMAYA_EDITOR_PATH" : Text => path(Tool::Amaya),
    AudacityPath = "AUDACITY_EDITOR_PATH" : Text => path(Tool::Audacity),
    MuseScorePath = "MUSESCORE_EDITOR_PATH" : Text => path(Tool::MuseScore),
    GimpPath = "GIMP_EDITOR_PATH" : Text => path(Tool::Gimp),
    ImageJPath = "IMAGEJ_EDITOR_PATH" : Text => path(Tool::ImageJ),
    ImageMagickPath = "IMAGEMAGICK_EDITOR_PATH" : Text => path(Tool::ImageMagick),
    FijiPath = "FIJI_EDITOR_PATH" : Text => path(Tool::Fiji),
    VlcPath = "VLC_PLAYER_PATH" : Text => path(Tool::Vlc),
    BlenderPath = "BLENDER_X3D_EDITOR_PATH" : Text => path(Tool::Blender),
    BsContentStudioPath = "BSCONTENTSTUDIO_X3D_EDITOR_PATH" : Text => path(Tool::BsContentStudio),
    CuraPath = "CURA_X3D_EDITOR_PATH" : Text => path(Tool::Cura),
    MeshLabPath = "MESHLAB_X3D_EDITOR_PATH" : Text => path(Tool::MeshLab),
    ParaviewPath = "PARAVIEW_X3D_EDITOR_PATH" : Text => path(Tool::Paraview),
    PolyTransNuGrafPath = "POLYTRANSNUGRAF_EDITOR_PATH" : Text => path(Tool::PolyTransNuGraf),
    Seamless3dPath = "SEAMLESS3D_X3D_EDITOR_PATH" : Text => path(Tool::Seamless3d),
    ItksnapPath = "ITKSNAP_X3D_EDITOR_PATH" : Text => path(Tool::Itksnap),
    Seg3dPath = "SEG3D_X3D_EDITOR_PATH" : Text => path(Tool::Seg3d),
    Slicer3dPath = "SLICER3D_X3D_EDITOR_PATH" : Text => path(Tool::Slicer3d),
    SvgEditPath = "SVG_EDIT_X3D_EDITOR_PATH" : Text => path(Tool::SvgEdit),
    WhiteDunePath = "WHITEDUNE_X3D_EDITOR_PATH" : Text => path(Tool::WhiteDune),
    Wings3dPath = "WINGS3D_X3D_EDITOR_PATH" : Text => path(Tool::Wings3d),
    UltraEditPath = "ULTRAEDIT_X3D_EDITOR_PATH" : Text => path(Tool::UltraEdit),

    OtherAudioEditorName = "OTHER_AUDIO_EDITOR_NAME" : Text => text(OTHER_TOOL_NAME),
    OtherHtml5EditorName = "OTHER_HTML5_EDITOR_NAME" : Text => text(OTHER_TOOL_NAME),
    OtherImageEditorName = "OTHER_IMAGE_EDITOR_NAME" : Text => text(OTHER_TOOL_NAME),
    OtherVideoEditorName = "OTHER_VIDEO_EDITOR_NAME" : Text => text(OTHER_TOOL_NAME),
    OtherVolumeEditorName = "OTHER_VOLUME_EDITOR_NAME" : Text => text(OTHER_TOOL_NAME),
    OtherSceneEditorName = "OTHER_X3D_EDITOR_NAME" : Text => text(OTHER_EDITOR_NAME),
    OtherAudioEditorPath = "OTHER_AUDIO_EDITOR_PATH" : Text => path(Tool::OtherAudioEditor),
    OtherHtml5EditorPath = "OTHER_HTML5_EDITOR_PATH" : Text => path(Tool::OtherHtml5Editor),
    OtherImageEditorPath = "OTHER_IMAGE_EDITOR_PATH" : Text => path(Tool::OtherImageEditor),
    OtherVideoEditorPath = "OTHER_VIDEO_EDITOR_PATH" : Text => path(Tool::OtherVideoEditor),
    OtherVolumeEditorPath = "OTHER_VOLUME_EDITOR_PATH" : Text => path(Tool::OtherVolumeEditor),
    OtherSceneEditorPath = "OTHER_X3D_EDITOR_PATH" : Text => path(Tool::OtherSceneEditor),
    OtherAudioEditorSwitch = "OTHER_AUDIO_EDITOR_SWITCH" : Text => text(""),
    OtherHtml5EditorSwitch = "OTHER_HTML5_EDITOR_SWITCH" : Text => text(""),
    OtherImageEditorSwitch = "OTHER_IMAGE_EDITOR_SWITCH" : Text => text(""),
    OtherVideoEditorSwitch = "OTHER_VIDEO_EDITOR_SWITCH" : Text => text(""),
    OtherVolumeEditorSwitch = "OTHER_VOLUME_EDITOR_SWITCH" : Text => text(""),
    OtherSceneEditorSwitch = "OTHER_X3D_EDITOR_SWITCH" : Text => text(""),

    // -- Security ---------------------------------------------------------
    KeystorePath = "KEYSTORE_PATH" : Text => text(""),
    CertificateSerial = "CERTIFICATE_SERIALNUMBER" : Long => DefaultSource::CertificateSerial,

    // -- CAD filter -------------------------------------------------------
    CadX3dVersion = "CADFILTER_KEY_VERSION" : Text => text("3.2"),
    CadTriangleCount = "CADFILTER_KEY_TRIANGLE_COUNT" : Bool => flag(false),
    CadLogLevel = "CADFILTER_KEY_LOG_LEVEL" : Text => text("ALL"),
    CadEmbedProto = "CADFILTER_KEY_EMBED_PROTO" : Bool => flag(false),
    CadBinaryCompression = "CADFILTER_KEY_BIN_COMPRESS" : Text => text("SMALLEST"),
    CadMinimumProfile = "CADFILTER_KEY_MIN_PROFILE" : Bool => flag(false),
    CadAppearanceFilter = "CADFILTER_KEY_APPEARANCE_FILTER" : Bool => flag(false),
    CadIdentityFilter = "CADFILTER_KEY_IDENTITY_FILTER" : Bool => flag(true),
    CadFiltersEnabled = "CADFILTER_KEY_CAD_FILTERS" : Bool => flag(false),
    CadAbsScaleFactor = "CADFILTER_KEY_ABS_SCALE_FACTOR" : Text => text("1.0"),
    CadBoundingBoxes = "CADFILTER_KEY_BOUNDING_BOXES" : Bool => flag(false),
    CadIfsToIts = "CADFILTER_KEY_IFACE_TO_ITRIANGLE" : Bool => flag(false),
    CadFloatQuantization = "CADFILTER_KEY_FLOAT_QUANT" : Text => text("0.001"),
    CadCenter = "CADFILTER_KEY_CENTER" : Bool => flag(false),
    CadIfsToTs = "CADFILTER_KEY_IFACE_TO_TRIANGLE" : Bool => flag(false),
    CadCombineAppearances = "CADFILTER_KEY_COMBINE_APPEARANCES" : Bool => flag(false),
    CadCombineShapes = "CADFILTER_KEY_COMBINE_SHAPES" : Bool => flag(false),
    CadIndex = "CADFILTER_KEY_INDEX" : Bool => flag(false),
    CadDefUseImageTexture = "CADFILTER_KEY_DEFUSE_IMAGE_TEXTURE" : Bool => flag(false),
    CadMaterial = "CADFILTER_KEY_MATERIAL" : Bool => flag(false),
    CadModifyViewpoint = "CADFILTER_KEY_MOD_VIEWPOINT" : Bool => flag(false),
    CadFlattenTransform = "CADFILTER_KEY_FLATTEN_TRANSFORM" : Bool => flag(false),
    CadFlattenTextureTransform = "CADFILTER_KEY_FLATTEN_TEXTURETRANSFORM" : Bool => flag(false),
    CadFlattenSelectable = "CADFILTER_KEY_FLATTEN_SELECTABLE" : Bool => flag(false),
    CadShortenDef = "CADFILTER_KEY_SHORTEN_DEF" : Bool => flag(false),
    CadGenerateNormals = "CADFILTER_KEY_GEN_NORMALS" : Bool => flag(false),
    CadTriangulation = "CADFILTER_KEY_TRIANGULATION" : Bool => flag(false),
    CadReindex = "CADFILTER_KEY_REINDEX" : Bool => flag(false),
    CadDebug = "CADFILTER_KEY_DEBUG" : Bool => flag(false),

    // -- DIS --------------------------------------------------------------
    DisAddress = "DIS_ADDRESS" : Text => CALLER,
    DisPort = "DIS_PORT" : Text => CALLER,
    DisAppId = "DIS_APPID" : Text => CALLER,
    DisEntityId = "DIS_ENTITYID" : Text => CALLER,
    DisSiteId = "DIS_SITEID" : Text => CALLER,
    DisScaleX = "DIS_SCALEX" : Text => CALLER,
    DisScaleY = "DIS_SCALEY" : Text => CALLER,
    DisScaleZ = "DIS_SCALEZ" : Text => CALLER,
}

impl PrefKey {
    /// Look up a key by its storage string.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.key() == key)
    }

    /// Key that the legacy getter for `self` actually reads.
    ///
    /// Three CAD filter getters have always read a different key from the
    /// one their setter writes. Stored files and the external filter tool
    /// depend on that, so the aliases are kept unless explicitly disabled.
    pub fn legacy_read_alias(self) -> Option<PrefKey> {
        match self {
            Self::CadAppearanceFilter => Some(Self::CadIdentityFilter),
            Self::CadCombineAppearances => Some(Self::CadCombineShapes),
            Self::CadMaterial => Some(Self::CadModifyViewpoint),
            _ => None,
        }
    }
}

impl std::fmt::Display for PrefKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Keys that are reset together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefGroup {
    /// All CAD filter options.
    CadFilter,
    /// Line color, shape color, and transparency.
    Visualize,
    /// HAnim joint, segment, and site colors.
    VisualizeHanim,
    /// Newline handling options.
    Newline,
}

impl PrefGroup {
    pub fn keys(self) -> &'static [PrefKey] {
        use PrefKey as K;
        match self {
            Self::CadFilter => CAD_FILTER_KEYS,
            Self::Visualize => &[
                K::VisualizeLineColorRed,
                K::VisualizeLineColorGreen,
                K::VisualizeLineColorBlue,
                K::VisualizeShapeColorRed,
                K::VisualizeShapeColorGreen,
                K::VisualizeShapeColorBlue,
                K::VisualizeTransparency,
            ],
            Self::VisualizeHanim => &[
                K::VisualizeHanimJointColorRed,
                K::VisualizeHanimJointColorGreen,
                K::VisualizeHanimJointColorBlue,
                K::VisualizeHanimSegmentColorRed,
                K::VisualizeHanimSegmentColorGreen,
                K::VisualizeHanimSegmentColorBlue,
                K::VisualizeHanimSiteColorRed,
                K::VisualizeHanimSiteColorGreen,
                K::VisualizeHanimSiteColorBlue,
            ],
            Self::Newline => &[K::ShowNewlineOption, K::PrependNewline, K::AppendNewline],
        }
    }
}

/// The 29 options read by the external CAD filter tool.
pub const CAD_FILTER_KEYS: &[PrefKey] = &[
    PrefKey::CadX3dVersion,
    PrefKey::CadTriangleCount,
    PrefKey::CadLogLevel,
    PrefKey::CadEmbedProto,
    PrefKey::CadBinaryCompression,
    PrefKey::CadMinimumProfile,
    PrefKey::CadAppearanceFilter,
    PrefKey::CadIdentityFilter,
    PrefKey::CadFiltersEnabled,
    PrefKey::CadAbsScaleFactor,
    PrefKey::CadBoundingBoxes,
    PrefKey::CadIfsToIts,
    PrefKey::CadFloatQuantization,
    PrefKey::CadCenter,
    PrefKey::CadIfsToTs,
    PrefKey::CadCombineAppearances,
    PrefKey::CadCombineShapes,
    PrefKey::CadIndex,
    PrefKey::CadDefUseImageTexture,
    PrefKey::CadMaterial,
    PrefKey::CadModifyViewpoint,
    PrefKey::CadFlattenTransform,
    PrefKey::CadFlattenTextureTransform,
    PrefKey::CadFlattenSelectable,
    PrefKey::CadShortenDef,
    PrefKey::CadGenerateNormals,
    PrefKey::CadTriangulation,
    PrefKey::CadReindex,
    PrefKey::CadDebug,
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_storage_keys_are_unique() {
        let mut seen = HashSet::new();
        for key in PrefKey::ALL {
            assert!(seen.insert(key.key()), "duplicate storage key {}", key.key());
        }
    }

    #[test]
    fn test_from_key_finds_every_variant() {
        for &key in PrefKey::ALL {
            assert_eq!(PrefKey::from_key(key.key()), Some(key));
        }
        assert_eq!(PrefKey::from_key("NOT_A_KEY"), None);
    }

    #[test]
    fn test_cad_filter_group_has_29_prefixed_keys() {
        assert_eq!(CAD_FILTER_KEYS.len(), 29);
        let unique: HashSet<_> = CAD_FILTER_KEYS.iter().collect();
        assert_eq!(unique.len(), 29);
        for key in CAD_FILTER_KEYS {
            assert!(key.key().starts_with("CADFILTER_KEY_"), "{key}");
        }
        let prefixed = PrefKey::ALL
            .iter()
            .filter(|k| k.key().starts_with("CADFILTER_KEY_"))
            .count();
        assert_eq!(prefixed, 29, "every CADFILTER key belongs to the group");
    }

    #[test]
    fn test_bool_keys_have_flag_defaults() {
        for &key in PrefKey::ALL {
            if key.kind() == PrefKind::Bool {
                assert!(
                    matches!(key.default_source(), DefaultSource::Flag(_)),
                    "{key} is Bool without a flag default"
                );
            }
        }
    }

    #[test]
    fn test_legacy_aliases_point_into_cad_group() {
        let aliased: Vec<_> = PrefKey::ALL
            .iter()
            .filter_map(|k| k.legacy_read_alias().map(|a| (*k, a)))
            .collect();
        assert_eq!(
            aliased,
            vec![
                (PrefKey::CadAppearanceFilter, PrefKey::CadIdentityFilter),
                (PrefKey::CadCombineAppearances, PrefKey::CadCombineShapes),
                (PrefKey::CadMaterial, PrefKey::CadModifyViewpoint),
            ]
        );
    }
}
