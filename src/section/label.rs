// src/section/label.rs

/// The closed set of section labels a SR-4731 file can carry.
///
/// The standard sections (`Map`, `GenParams`, `SupParams`, `FxdParams`,
/// `DataPts`, `KeyEvents`, `Cksum`) are joined by the vendor blocks that
/// appear in real-world files. Vendor blocks are located so that their
/// bytes bound neighbouring sections; only `WaveMTSParams` is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionLabel {
    SupParams,
    ExfoNewProprietaryBlock,
    Map,
    FxdParams,
    YokogawaSpecial,
    SetupParams,
    DataPts,
    NokiaParams,
    KeyEvents,
    GenParams,
    WaveMtsParams,
    WavetekTwoMts,
    WavetekThreeMts,
    BlocOtdrPrivate,
    ActernaConfig,
    ActernaMiniCurve,
    AcqParam,
    ViewParams,
    SystemParams,
    AnalysisParams,
    MiscParams,
    JdsuEvenementsMts,
    Cksum,
}

impl SectionLabel {
    pub const ALL: [SectionLabel; 23] = [
        SectionLabel::SupParams,
        SectionLabel::ExfoNewProprietaryBlock,
        SectionLabel::Map,
        SectionLabel::FxdParams,
        SectionLabel::YokogawaSpecial,
        SectionLabel::SetupParams,
        SectionLabel::DataPts,
        SectionLabel::NokiaParams,
        SectionLabel::KeyEvents,
        SectionLabel::GenParams,
        SectionLabel::WaveMtsParams,
        SectionLabel::WavetekTwoMts,
        SectionLabel::WavetekThreeMts,
        SectionLabel::BlocOtdrPrivate,
        SectionLabel::ActernaConfig,
        SectionLabel::ActernaMiniCurve,
        SectionLabel::AcqParam,
        SectionLabel::ViewParams,
        SectionLabel::SystemParams,
        SectionLabel::AnalysisParams,
        SectionLabel::MiscParams,
        SectionLabel::JdsuEvenementsMts,
        SectionLabel::Cksum,
    ];

    /// The exact byte literal the label appears as in the file.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionLabel::SupParams => "SupParams",
            SectionLabel::ExfoNewProprietaryBlock => "ExfoNewProprietaryBlock",
            SectionLabel::Map => "Map",
            SectionLabel::FxdParams => "FxdParams",
            SectionLabel::YokogawaSpecial => "YokogawaSpecial",
            SectionLabel::SetupParams => "SetupParams",
            SectionLabel::DataPts => "DataPts",
            SectionLabel::NokiaParams => "NokiaParams",
            SectionLabel::KeyEvents => "KeyEvents",
            SectionLabel::GenParams => "GenParams",
            SectionLabel::WaveMtsParams => "WaveMTSParams",
            SectionLabel::WavetekTwoMts => "WavetekTwoMTS",
            SectionLabel::WavetekThreeMts => "WavetekThreeMTS",
            SectionLabel::BlocOtdrPrivate => "BlocOtdrPrivate",
            SectionLabel::ActernaConfig => "ActernaConfig",
            SectionLabel::ActernaMiniCurve => "ActernaMiniCurve",
            SectionLabel::AcqParam => "AcqParam",
            SectionLabel::ViewParams => "ViewParams",
            SectionLabel::SystemParams => "SystemParams",
            SectionLabel::AnalysisParams => "AnalysisParams",
            SectionLabel::MiscParams => "MiscParams",
            SectionLabel::JdsuEvenementsMts => "JDSUEvenementsMTS",
            SectionLabel::Cksum => "Cksum",
        }
    }

    pub fn as_bytes(&self) -> &'static [u8] {
        self.as_str().as_bytes()
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.as_str().len()
    }
}

impl std::fmt::Display for SectionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
