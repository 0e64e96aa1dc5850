// X3dPrefs - core/defaults.rs
//
// Platform default resolution for external tool paths.
//
// The host is classified once into one of four buckets (macOS, Windows
// 64-bit, Windows 32-bit, other) and every tool path default is taken from
// that bucket's column of the static table below. Resolution is pure: the
// host description is supplied by the platform layer.

use crate::util::constants::{
    OS_NAME_MAC, OS_NAME_WINDOWS, OS_NAME_WINDOWS_XP, SVG_EDIT_RELATIVE_PATH, USER_NAME_TOKEN,
    WIN64_LIBRARY_MARKER,
};
use std::collections::HashMap;
use std::fmt;

use super::keys::PrefKey;

// =============================================================================
// Platform classification
// =============================================================================

/// Platform bucket that selects a column of the default path table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    MacOs,
    Windows64,
    Windows32,
    Other,
}

impl Platform {
    /// Classify a host from its OS name and library search path.
    ///
    /// Anything unrecognised lands in `Other`; classification cannot fail.
    pub fn classify(os_name: &str, library_path: &str) -> Self {
        let is_mac = os_name == OS_NAME_MAC || os_name.contains("Mac");
        let is_windows = os_name == OS_NAME_WINDOWS_XP || os_name.contains(OS_NAME_WINDOWS);

        if is_mac {
            Self::MacOs
        } else if is_windows && library_path.contains(WIN64_LIBRARY_MARKER) {
            Self::Windows64
        } else if is_windows {
            Self::Windows32
        } else {
            Self::Other
        }
    }

    /// Column of the default table used by this bucket.
    fn column(self) -> usize {
        match self {
            Self::MacOs => 0,
            Self::Windows64 => 1,
            Self::Windows32 => 2,
            Self::Other => 3,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::MacOs => "macOS",
            Self::Windows64 => "Windows (64-bit)",
            Self::Windows32 => "Windows (32-bit)",
            Self::Other => "Other",
        };
        f.write_str(name)
    }
}

/// Host facts needed to resolve defaults. Filled in by `platform::host`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostProfile {
    /// OS name in the traditional form, e.g. "Mac OS X", "Windows 10", "Linux".
    pub os_name: String,
    /// Native library search path of the host process.
    pub library_path: String,
    /// Login name substituted for the user-name token.
    pub user_name: String,
    /// Directory the editor was launched from.
    pub working_dir: String,
}

// =============================================================================
// Tool catalogue
// =============================================================================

/// Broad grouping used to lay out the external tools form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolCategory {
    X3dPlayer,
    X3dEditor,
    Image,
    Audio,
    Video,
    Volume,
    Html5,
}

impl ToolCategory {
    pub const ALL: [ToolCategory; 7] = [
        Self::X3dPlayer,
        Self::X3dEditor,
        Self::Image,
        Self::Audio,
        Self::Video,
        Self::Volume,
        Self::Html5,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::X3dPlayer => "X3D players",
            Self::X3dEditor => "X3D and model editors",
            Self::Image => "Image tools",
            Self::Audio => "Audio tools",
            Self::Video => "Video tools",
            Self::Volume => "Volume visualization",
            Self::Html5 => "HTML5 tools",
        }
    }
}

/// Every external application whose location is a preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tool {
    // X3D players
    Contact,
    ContactGeo,
    FreeWrl,
    H3d,
    Heilan,
    InstantReality,
    Octaga,
    SwirlX3d,
    View3dScene,
    Vivaty,
    Xj3d,
    OtherX3dPlayer,
    // Authoring tools
    Amaya,
    Audacity,
    MuseScore,
    Gimp,
    Fiji,
    ImageJ,
    ImageMagick,
    Vlc,
    Blender,
    BsContentStudio,
    Cura,
    MeshLab,
    Paraview,
    PolyTransNuGraf,
    Seamless3d,
    Itksnap,
    Seg3d,
    Slicer3d,
    SvgEdit,
    WhiteDune,
    Wings3d,
    UltraEdit,
    OtherX3dEditor,
    OtherAudioEditor,
    OtherHtml5Editor,
    OtherImageEditor,
    OtherVideoEditor,
    OtherVolumeEditor,
    OtherSceneEditor,
}

impl Tool {
    pub const ALL: [Tool; 41] = [
        Self::Contact,
        Self::ContactGeo,
        Self::FreeWrl,
        Self::H3d,
        Self::Heilan,
        Self::InstantReality,
        Self::Octaga,
        Self::SwirlX3d,
        Self::View3dScene,
        Self::Vivaty,
        Self::Xj3d,
        Self::OtherX3dPlayer,
        Self::Amaya,
        Self::Audacity,
        Self::MuseScore,
        Self::Gimp,
        Self::Fiji,
        Self::ImageJ,
        Self::ImageMagick,
        Self::Vlc,
        Self::Blender,
        Self::BsContentStudio,
        Self::Cura,
        Self::MeshLab,
        Self::Paraview,
        Self::PolyTransNuGraf,
        Self::Seamless3d,
        Self::Itksnap,
        Self::Seg3d,
        Self::Slicer3d,
        Self::SvgEdit,
        Self::WhiteDune,
        Self::Wings3d,
        Self::UltraEdit,
        Self::OtherX3dEditor,
        Self::OtherAudioEditor,
        Self::OtherHtml5Editor,
        Self::OtherImageEditor,
        Self::OtherVideoEditor,
        Self::OtherVolumeEditor,
        Self::OtherSceneEditor,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Contact => "BS Contact",
            Self::ContactGeo => "BS Contact Geo",
            Self::FreeWrl => "FreeWRL",
            Self::H3d => "H3D Viewer",
            Self::Heilan => "Heilan",
            Self::InstantReality => "Instant Reality",
            Self::Octaga => "Octaga Player",
            Self::SwirlX3d => "SwirlX3D",
            Self::View3dScene => "view3dscene",
            Self::Vivaty => "Vivaty Player",
            Self::Xj3d => "Xj3D",
            Self::OtherX3dPlayer => "Other X3D player",
            Self::Amaya => "Amaya",
            Self::Audacity => "Audacity",
            Self::MuseScore => "MuseScore",
            Self::Gimp => "GIMP",
            Self::Fiji => "Fiji",
            Self::ImageJ => "ImageJ",
            Self::ImageMagick => "ImageMagick",
            Self::Vlc => "VLC",
            Self::Blender => "Blender",
            Self::BsContentStudio => "BS Content Studio",
            Self::Cura => "Ultimaker Cura",
            Self::MeshLab => "MeshLab",
            Self::Paraview => "ParaView",
            Self::PolyTransNuGraf => "PolyTrans NuGraf",
            Self::Seamless3d => "Seamless3d",
            Self::Itksnap => "ITK-SNAP",
            Self::Seg3d => "Seg3D",
            Self::Slicer3d => "3D Slicer",
            Self::SvgEdit => "SVG-Edit",
            Self::WhiteDune => "White Dune",
            Self::Wings3d => "Wings 3D",
            Self::UltraEdit => "UltraEdit",
            Self::OtherX3dEditor => "Other X3D editor",
            Self::OtherAudioEditor => "Other audio tool",
            Self::OtherHtml5Editor => "Other HTML5 tool",
            Self::OtherImageEditor => "Other image tool",
            Self::OtherVideoEditor => "Other video tool",
            Self::OtherVolumeEditor => "Other volume tool",
            Self::OtherSceneEditor => "Other scene editor",
        }
    }

    pub fn category(self) -> ToolCategory {
        use ToolCategory as C;
        match self {
            Self::Contact
            | Self::ContactGeo
            | Self::FreeWrl
            | Self::H3d
            | Self::Heilan
            | Self::InstantReality
            | Self::Octaga
            | Self::SwirlX3d
            | Self::View3dScene
            | Self::Vivaty
            | Self::Xj3d
            | Self::OtherX3dPlayer => C::X3dPlayer,
            Self::Blender
            | Self::BsContentStudio
            | Self::Cura
            | Self::MeshLab
            | Self::PolyTransNuGraf
            | Self::Seamless3d
            | Self::WhiteDune
            | Self::Wings3d
            | Self::UltraEdit
            | Self::OtherX3dEditor
            | Self::OtherSceneEditor => C::X3dEditor,
            Self::Gimp
            | Self::Fiji
            | Self::ImageJ
            | Self::ImageMagick
            | Self::SvgEdit
            | Self::OtherImageEditor => C::Image,
            Self::Audacity | Self::MuseScore | Self::OtherAudioEditor => C::Audio,
            Self::Vlc | Self::OtherVideoEditor => C::Video,
            Self::Paraview
            | Self::Itksnap
            | Self::Seg3d
            | Self::Slicer3d
            | Self::OtherVolumeEditor => C::Volume,
            Self::Amaya | Self::OtherHtml5Editor => C::Html5,
        }
    }

    /// Preference holding the tool's executable path.
    pub fn path_key(self) -> PrefKey {
        use PrefKey as K;
        match self {
            Self::Contact => K::ContactPath,
            Self::ContactGeo => K::ContactGeoPath,
            Self::FreeWrl => K::FreeWrlPath,
            Self::H3d => K::H3dPath,
            Self::Heilan => K::HeilanPath,
            Self::InstantReality => K::InstantRealityPath,
            Self::Octaga => K::OctagaPath,
            Self::SwirlX3d => K::SwirlX3dPath,
            Self::View3dScene => K::View3dScenePath,
            Self::Vivaty => K::VivatyPath,
            Self::Xj3d => K::Xj3dPath,
            Self::OtherX3dPlayer => K::OtherX3dPlayerPath,
            Self::Amaya => K::AmayaPath,
            Self::Audacity => K::AudacityPath,
            Self::MuseScore => K::MuseScorePath,
            Self::Gimp => K::GimpPath,
            Self::Fiji => K::FijiPath,
            Self::ImageJ => K::ImageJPath,
            Self::ImageMagick => K::ImageMagickPath,
            Self::Vlc => K::VlcPath,
            Self::Blender => K::BlenderPath,
            Self::BsContentStudio => K::BsContentStudioPath,
            Self::Cura => K::CuraPath,
            Self::MeshLab => K::MeshLabPath,
            Self::Paraview => K::ParaviewPath,
            Self::PolyTransNuGraf => K::PolyTransNuGrafPath,
            Self::Seamless3d => K::Seamless3dPath,
            Self::Itksnap => K::ItksnapPath,
            Self::Seg3d => K::Seg3dPath,
            Self::Slicer3d => K::Slicer3dPath,
            Self::SvgEdit => K::SvgEditPath,
            Self::WhiteDune => K::WhiteDunePath,
            Self::Wings3d => K::Wings3dPath,
            Self::UltraEdit => K::UltraEditPath,
            Self::OtherX3dEditor => K::OtherX3dEditorPath,
            Self::OtherAudioEditor => K::OtherAudioEditorPath,
            Self::OtherHtml5Editor => K::OtherHtml5EditorPath,
            Self::OtherImageEditor => K::OtherImageEditorPath,
            Self::OtherVideoEditor => K::OtherVideoEditorPath,
            Self::OtherVolumeEditor => K::OtherVolumeEditorPath,
            Self::OtherSceneEditor => K::OtherSceneEditorPath,
        }
    }

    /// Preference holding the auto-launch flag, if the tool has one.
    pub fn autolaunch_key(self) -> Option<PrefKey> {
        use PrefKey as K;
        let key = match self {
            Self::Contact => K::ContactAutoLaunch,
            Self::ContactGeo => K::ContactGeoAutoLaunch,
            Self::FreeWrl => K::FreeWrlAutoLaunch,
            Self::H3d => K::H3dAutoLaunch,
            Self::Heilan => K::HeilanAutoLaunch,
            Self::InstantReality => K::InstantRealityAutoLaunch,
            Self::Octaga => K::OctagaAutoLaunch,
            Self::SwirlX3d => K::SwirlX3dAutoLaunch,
            Self::View3dScene => K::View3dSceneAutoLaunch,
            Self::Vivaty => K::VivatyAutoLaunch,
            Self::Xj3d => K::Xj3dAutoLaunch,
            Self::OtherX3dPlayer => K::OtherX3dPlayerAutoLaunch,
            Self::Amaya => K::AmayaAutoLaunch,
            Self::Audacity => K::AudacityAutoLaunch,
            Self::MuseScore => K::MuseScoreAutoLaunch,
            Self::Gimp => K::GimpAutoLaunch,
            Self::Fiji => K::FijiAutoLaunch,
            Self::ImageJ => K::ImageJAutoLaunch,
            Self::ImageMagick => K::ImageMagickAutoLaunch,
            Self::Vlc => K::VlcAutoLaunch,
            Self::Blender => K::BlenderAutoLaunch,
            Self::BsContentStudio => K::BsContentStudioAutoLaunch,
            Self::Cura => K::CuraAutoLaunch,
            Self::MeshLab => K::MeshLabAutoLaunch,
            Self::Paraview => K::ParaviewAutoLaunch,
            Self::PolyTransNuGraf => K::PolyTransNuGrafAutoLaunch,
            Self::Seamless3d => K::Seamless3dAutoLaunch,
            Self::Itksnap => K::ItksnapAutoLaunch,
            Self::Seg3d => K::Seg3dAutoLaunch,
            Self::Slicer3d => K::Slicer3dAutoLaunch,
            Self::SvgEdit => K::SvgEditAutoLaunch,
            Self::WhiteDune => K::WhiteDuneAutoLaunch,
            Self::Wings3d => K::Wings3dAutoLaunch,
            Self::UltraEdit => K::UltraEditAutoLaunch,
            Self::OtherX3dEditor => K::OtherX3dEditorAutoLaunch,
            Self::OtherAudioEditor => K::OtherAudioEditorAutoLaunch,
            Self::OtherHtml5Editor => K::OtherHtml5EditorAutoLaunch,
            Self::OtherImageEditor => K::OtherImageEditorAutoLaunch,
            Self::OtherVideoEditor => K::OtherVideoEditorAutoLaunch,
            Self::OtherVolumeEditor => K::OtherVolumeEditorAutoLaunch,
            Self::OtherSceneEditor => return None,
        };
        Some(key)
    }

    /// Preference holding the user-chosen display name of an "other" tool.
    pub fn name_key(self) -> Option<PrefKey> {
        use PrefKey as K;
        match self {
            Self::OtherX3dPlayer => Some(K::OtherX3dPlayerName),
            Self::OtherX3dEditor => Some(K::OtherX3dEditorName),
            Self::OtherAudioEditor => Some(K::OtherAudioEditorName),
            Self::OtherHtml5Editor => Some(K::OtherHtml5EditorName),
            Self::OtherImageEditor => Some(K::OtherImageEditorName),
            Self::OtherVideoEditor => Some(K::OtherVideoEditorName),
            Self::OtherVolumeEditor => Some(K::OtherVolumeEditorName),
            Self::OtherSceneEditor => Some(K::OtherSceneEditorName),
            _ => None,
        }
    }

    /// Preference holding extra command-line switches of an "other" tool.
    pub fn switch_key(self) -> Option<PrefKey> {
        use PrefKey as K;
        match self {
            Self::OtherX3dPlayer => Some(K::OtherX3dPlayerSwitch),
            Self::OtherAudioEditor => Some(K::OtherAudioEditorSwitch),
            Self::OtherHtml5Editor => Some(K::OtherHtml5EditorSwitch),
            Self::OtherImageEditor => Some(K::OtherImageEditorSwitch),
            Self::OtherVideoEditor => Some(K::OtherVideoEditorSwitch),
            Self::OtherVolumeEditor => Some(K::OtherVolumeEditorSwitch),
            Self::OtherSceneEditor => Some(K::OtherSceneEditorSwitch),
            _ => None,
        }
    }

    /// True for the user-configured catch-all entries.
    pub fn is_user_defined(self) -> bool {
        self.name_key().is_some()
    }

    pub fn download_site(self) -> &'static str {
        match self {
            Self::Contact | Self::ContactGeo => "https://www.bitmanagement.com",
            Self::FreeWrl => "https://sourceforge.net/projects/freewrl",
            Self::H3d => "https://www.h3dapi.org",
            Self::Heilan => "https://www.niallmoody.com/heilan",
            Self::InstantReality => "https://instantreality.org",
            Self::Octaga => "https://www.octagavs.com",
            Self::SwirlX3d => "http://www.pinecoast.com",
            Self::View3dScene => "https://castle-engine.io/view3dscene.php",
            Self::Vivaty => "https://www.web3d.org/projects/vivaty-studio",
            Self::Xj3d => "https://savage.nps.edu/Savage/developers.html#Xj3D",
            Self::OtherX3dPlayer => {
                "https://www.web3d.org/x3d/content/examples/X3dResources.html#Applications"
            }
            Self::Amaya => "https://www.w3.org/Amaya",
            Self::Audacity => "https://www.audacityteam.org/download",
            Self::MuseScore => "https://musescore.org",
            Self::Gimp => "https://www.gimp.org",
            Self::Fiji => "https://imagej.github.io/software/fiji/downloads",
            Self::ImageJ => "https://imagej.nih.gov/ij/download.html",
            Self::ImageMagick => "https://imagemagick.org/script/download.php",
            Self::Vlc => "https://www.videolan.org",
            Self::Blender => "https://www.blender.org",
            Self::BsContentStudio => "https://www.bitmanagement.com/download/studio",
            Self::Cura => "https://ultimaker.com/software/ultimaker-cura",
            Self::MeshLab => "https://www.meshlab.net",
            Self::Paraview => "https://www.kitware.com/platforms/#paraview",
            Self::PolyTransNuGraf => "https://www.okino.com",
            Self::Seamless3d => "https://www.seamless3d.com",
            Self::Itksnap => "http://www.itksnap.org",
            Self::Seg3d => "https://www.sci.utah.edu/cibc-software/seg3d.html",
            Self::Slicer3d => "https://www.slicer.org",
            Self::SvgEdit => "https://github.com/SVG-Edit",
            Self::WhiteDune => "https://wdune.ourproject.org",
            Self::Wings3d => "http://www.wings3d.com",
            Self::UltraEdit => "https://www.UltraEdit.com",
            Self::OtherX3dEditor | Self::OtherSceneEditor => {
                "https://www.web3d.org/x3d/content/examples/X3dResources.html#AuthoringSoftware"
            }
            Self::OtherAudioEditor => {
                "https://www.web3d.org/x3d/content/examples/X3dSceneAuthoringHints.html#Audio"
            }
            Self::OtherHtml5Editor => {
                "https://www.web3d.org/x3d/content/examples/X3dSceneAuthoringHints.html#HTML"
            }
            Self::OtherImageEditor | Self::OtherVideoEditor => {
                "https://www.web3d.org/x3d/content/examples/X3dSceneAuthoringHints.html#Images"
            }
            Self::OtherVolumeEditor => {
                "https://www.web3d.org/x3d/content/examples/X3dSceneAuthoringHints.html#Volumes"
            }
        }
    }

    pub fn help_site(self) -> Option<&'static str> {
        let url = match self {
            Self::Amaya => "https://www.w3.org/Amaya/User/Overview.html",
            Self::Audacity => "https://www.audacityteam.org/help/",
            Self::MuseScore => "https://musescore.org/en/handbook",
            Self::Gimp => "https://www.gimp.org/docs",
            Self::Fiji => "https://fiji.sc/Documentation",
            Self::ImageJ => "https://rsbweb.nih.gov/ij/docs",
            Self::ImageMagick => "https://www.imagemagick.org",
            Self::Vlc => "https://www.videolan.org/support/#documentation",
            Self::Blender => "https://www.blender.org/get-involved/documentation/",
            Self::BsContentStudio => "https://www.bitmanagement.com/download/studio",
            Self::Cura => "https://ultimaker.com/software/ultimaker-cura",
            Self::MeshLab => "https://www.meshlab.net",
            Self::Paraview => "https://www.paraview.org",
            Self::PolyTransNuGraf => "https://www.okino.com/nrs/nrs.htm",
            Self::Seamless3d => "https://www.seamless3d.com/faq.html",
            Self::Itksnap => "http://www.itksnap.org/pmwiki/pmwiki.php?n=Documentation.SNAP3",
            Self::Seg3d => "https://www.sci.utah.edu/cibc-software/seg3d.html",
            Self::Slicer3d => "https://www.slicer.org/slicerWiki/index.php/Documentation/Release",
            Self::SvgEdit => "https://en.wikipedia.org/wiki/SVG-edit",
            Self::WhiteDune => "https://wdune.ourproject.org/docs",
            Self::Wings3d => "http://www.wings3d.com/?page_id=87",
            Self::UltraEdit => "https://www.ultraedit.com/wiki/Main_Page",
            _ => return None,
        };
        Some(url)
    }

    /// Default path per bucket, in `[macOS, Windows 64, Windows 32, other]` order.
    ///
    /// Entries may contain the user-name token. svg-edit is resolved against
    /// the working directory instead and has no row.
    fn table_row(self) -> [&'static str; 4] {
        const EMPTY: [&str; 4] = ["", "", "", ""];
        const BS_CONTACT_WIN64: &str =
            r"C:\Users\__USER-NAME__\AppData\Local\Bitmanagement Software\BS Contact\BSContact.exe";
        const BS_CONTACT_WIN32: &str =
            r"C:\Users\__USER-NAME__\AppData\Local\Bitmanagement Software\BS Contact\";
        match self {
            Self::Contact => [
                "/Applications/BS Contact.app",
                BS_CONTACT_WIN64,
                BS_CONTACT_WIN32,
                "ContactPlayer",
            ],
            Self::ContactGeo => [
                "/Applications/BS Contact Geo.app",
                BS_CONTACT_WIN64,
                BS_CONTACT_WIN32,
                "ContactGeoPlayer",
            ],
            Self::FreeWrl => [
                "/Applications/FreeWRL/FreeWrl.app",
                r"C:\Program Files (x86)\freeWRL\freeWRL.4\freeWRL.exe",
                r"C:\Program Files\freeWRL\freeWRL.3\freeWRL.exe",
                "FreeWrlPlayer",
            ],
            Self::H3d => [
                "/Applications/H3DViewer.app",
                r"C:\Program Files\SenseGraphics\H3DViewer\bin64\H3DViewer.exe",
                r"C:\Program Files\SenseGraphics\H3DViewer\bin32\H3DViewer.exe",
                "H3DViewer",
            ],
            Self::Heilan => [
                "/Applications/HeilanBrowser.app",
                r"C:\Program Files (x86)\HeilanBrowser-0.15\HeilanBrowser.exe",
                r"C:\Program Files\HeilanBrowser-0.15\HeilanBrowser.exe",
                "HeilanBrowser",
            ],
            Self::InstantReality => [
                "/Applications/Instant Player.app",
                r"C:\Program Files\Instant Reality\bin\InstantPlayer.exe",
                r"C:\Program Files\Instant Reality\bin\InstantPlayer.exe",
                "InstantPlayer",
            ],
            Self::Octaga => [
                "/Applications/Octaga Player.app",
                r"C:\Program Files\Octaga Visual Solutions\Octaga Player 5.0 (64 bit)\OctagaPlayer.exe",
                r"C:\Program Files\Octaga Visual Solutions\Octaga Player 5.0 (64 bit)\OctagaPlayer.exe",
                "OctagaPlayer",
            ],
            Self::SwirlX3d => [
                "",
                r"C:\Program Files (x86)\Pinecoast\SwirlViewer\SwView.exe",
                r"C:\Program Files\Pinecoast\SwirlViewer\SwView.exe",
                "SwirlX3DPlayer",
            ],
            Self::View3dScene => [
                "",
                r"C:\Program Files\view3dscene\view3dscene.exe",
                r"C:\Program Files\view3dscene\view3dscene.exe",
                "View3dScene",
            ],
            Self::Vivaty => [
                "",
                r"C:\Program Files (x86)\Vivaty\VivatyPlayer\VivatyPlayer.exe",
                r"C:\Program Files\Vivaty\VivatyPlayer\VivatyPlayer.exe",
                "VivatyPlayer",
            ],
            Self::Xj3d => [
                "/Applications/Xj3D/Xj3DBrowser.app",
                r"C:\Program Files (x86)\Xj3D\browser.bat",
                r"C:\Program Files\Xj3D\browser.bat",
                "Xj3DPlayer",
            ],
            Self::Amaya => [
                "",
                r"C:\Program Files (x86)\Amaya\WindowsWX\bin\amaya.exe",
                r"C:\Program Files\Amaya\WindowsWX\bin\amaya.exe",
                "Other X3D player",
            ],
            Self::Audacity => [
                "audacity",
                r"C:\Program Files (x86)\Audacity\audacity.exe",
                r"C:\Program Files\Audacity\audacity.exe",
                "audacity",
            ],
            Self::MuseScore => same_on_windows(
                "musescore",
                r"C:\Program Files\MuseScore 3\bin\MuseScore3.exe",
            ),
            Self::Gimp => same_on_windows("gimp-2.10", r"C:\Program Files\GIMP 2\bin\gimp-2.10.exe"),
            Self::Fiji => [
                "Fiji",
                r"C:\Program Files\Fiji.app\ImageJ-win64.exe",
                r"C:\Program Files\Fiji.app\ImageJ-win32.exe",
                "ImageJ-linux64",
            ],
            Self::ImageJ => same_on_windows("ij.jar", r"C:\Program Files\ImageJ\ImageJ.exe"),
            Self::ImageMagick => same_on_windows(
                "imageconverter",
                r"C:\Program Files\ImageMagick-7.0.11-Q16-HDRI\imdisplay.exe",
            ),
            Self::Vlc => same_on_windows("vlc", r"C:\Program Files\VideoLAN\VLC\vlc.exe"),
            Self::Blender => same_on_windows(
                "blender",
                r"C:\Program Files\Blender Foundation\Blender 2.92\blender.exe",
            ),
            Self::BsContentStudio => [
                "bscomposer",
                r"C:\Program Files (x86)\Bitmanagement Software\BS Content Studio\x64\BSComposer.exe",
                r"C:\Program Files\Bitmanagement Software\BS Content Studio\x64\BSComposer.exe",
                "bscomposer",
            ],
            Self::Cura => same_on_windows("Cura", r"C:\Program Files\Ultimaker Cura 4.9.1\Cura.exe"),
            Self::MeshLab => same_on_windows("MeshLab", r"C:\Program Files\VCG\MeshLab\meshlab.exe"),
            Self::Paraview => same_on_windows(
                "Paraview",
                r"C:\Program Files\ParaView 5.9.1-Windows-Python3.8-msvc2017-64bit\bin\paraview.exe",
            ),
            Self::PolyTransNuGraf => [
                "/Applications/NuGraf.app",
                r"C:\Program Files\NuGraf64\NuGraf64.exe",
                r"C:\Program Files\NuGraf64\NuGraf64.exe",
                "NuGraf",
            ],
            Self::Seamless3d => [
                "Seamless3d",
                r"C:\Program Files (x86)\Seamless3d\seamless3d.exe",
                r"C:\Program Files\Seamless3d (x86)\seamless3d.exe",
                "Seamless3d",
            ],
            Self::Itksnap => {
                same_on_windows("Itksnap", r"C:\Program Files\ITK-SNAP 3.8\bin\ITK-SNAP.exe")
            }
            Self::Seg3d => same_on_windows("Seg3d", r"C:\Program Files\Seg3D2_2.5\bin\Seg3D2.exe"),
            Self::Slicer3d => same_on_windows("Slicer3d", r"C:\Program Files\Slicer 4.3.1\Slicer.exe"),
            Self::WhiteDune => {
                same_on_windows("WhiteDune", r"C:\installs\WhiteDune\wdune-0.99pl164.exe")
            }
            Self::Wings3d => {
                same_on_windows("Wings3d", r"C:\Program Files\wings3d_2.2.6.1\Wings3D.exe")
            }
            Self::UltraEdit => [
                "UltraEdit",
                r"C:\Program Files\IDM Computer Solutions\UltraEdit\uedit64.exe",
                r"C:\Program Files\IDM Computer Solutions\UltraEdit\uedit32.exe",
                "UltraEdit",
            ],
            Self::SvgEdit
            | Self::OtherX3dPlayer
            | Self::OtherX3dEditor
            | Self::OtherAudioEditor
            | Self::OtherHtml5Editor
            | Self::OtherImageEditor
            | Self::OtherVideoEditor
            | Self::OtherVolumeEditor
            | Self::OtherSceneEditor => EMPTY,
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Row for tools that share one Windows path and one Unix-style command.
const fn same_on_windows(unix: &'static str, windows: &'static str) -> [&'static str; 4] {
    [unix, windows, windows, unix]
}

// =============================================================================
// Resolved defaults
// =============================================================================

/// Tool path defaults for the running host, resolved once at startup.
#[derive(Debug, Clone)]
pub struct PlatformDefaults {
    platform: Platform,
    paths: HashMap<Tool, String>,
}

impl PlatformDefaults {
    /// Classify `host` and resolve every tool path default from its bucket.
    pub fn resolve(host: &HostProfile) -> Self {
        let platform = Platform::classify(&host.os_name, &host.library_path);
        let column = platform.column();

        let paths = Tool::ALL
            .iter()
            .map(|&tool| {
                let path = if tool == Tool::SvgEdit {
                    svg_edit_path(&host.working_dir)
                } else {
                    tool.table_row()[column].replace(USER_NAME_TOKEN, &host.user_name)
                };
                (tool, path)
            })
            .collect();

        tracing::debug!(
            platform = %platform,
            os_name = %host.os_name,
            "Platform defaults resolved"
        );

        Self { platform, paths }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Default executable path for `tool` on this host.
    pub fn path(&self, tool: Tool) -> &str {
        self.paths.get(&tool).map(String::as_str).unwrap_or("")
    }
}

fn svg_edit_path(working_dir: &str) -> String {
    if working_dir.is_empty() {
        SVG_EDIT_RELATIVE_PATH.to_string()
    } else {
        format!(
            "{}/{SVG_EDIT_RELATIVE_PATH}",
            working_dir.trim_end_matches(['/', '\\'])
        )
    }
}
