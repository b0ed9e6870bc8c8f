//! Table of the solver's input fields.

use ocean_common::FieldShape;

/// One configurable input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputField {
    /// Configuration section holding the specifier
    pub section: &'static str,
    /// Configuration key, also the output file stem
    pub key: &'static str,
    pub shape: FieldShape,
}

impl InputField {
    /// Name of the file this field is written to.
    pub fn file_name(&self) -> String {
        format!("{}.bin", self.key)
    }
}

const fn input(section: &'static str, key: &'static str, shape: FieldShape) -> InputField {
    InputField { section, key, shape }
}

/// Input fields in the order they are written.
pub const INPUT_FIELDS: [InputField; 17] = [
    // Initial conditions
    input("initial_conditions", "initHfile", FieldShape::Tracer3d),
    input("initial_conditions", "initUfile", FieldShape::U3d),
    input("initial_conditions", "initVfile", FieldShape::V3d),
    input("initial_conditions", "initEtaFile", FieldShape::Tracer2d),
    // Bathymetry, Coriolis and land mask
    input("grid", "depthFile", FieldShape::Tracer2d),
    input("grid", "fUfile", FieldShape::U2d),
    input("grid", "fVfile", FieldShape::V2d),
    input("grid", "wetMaskFile", FieldShape::Tracer2d),
    // Sponge relaxation
    input("sponge", "spongeHTimeScaleFile", FieldShape::Tracer3d),
    input("sponge", "spongeUTimeScaleFile", FieldShape::U3d),
    input("sponge", "spongeVTimeScaleFile", FieldShape::V3d),
    input("sponge", "spongeHFile", FieldShape::Tracer3d),
    input("sponge", "spongeUfile", FieldShape::U3d),
    input("sponge", "spongeVfile", FieldShape::V3d),
    // Surface forcing
    input("external_forcing", "zonalWindFile", FieldShape::U2d),
    input("external_forcing", "meridionalWindFile", FieldShape::V2d),
    input("external_forcing", "wind_mag_time_series_file", FieldShape::TimeSeries),
];

/// Look up an input field by configuration key.
pub fn find_input(key: &str) -> Option<&'static InputField> {
    INPUT_FIELDS.iter().find(|f| f.key == key)
}
