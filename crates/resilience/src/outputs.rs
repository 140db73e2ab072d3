//! Output variables a resiliency simulation must report.

/// Standard Effective Temperature, input to the winter classification.
pub const SET_VARIABLE: &str = "Zone Thermal Comfort Pierce Model Standard Effective Temperature";

/// Heat index, input to the summer classification.
pub const HEAT_INDEX_VARIABLE: &str = "Zone Heat Index";

/// Hourly output variables requested for a resiliency run.
pub const RESILIENCY_OUTPUT_VARIABLES: [&str; 31] = [
    SET_VARIABLE,
    "Zone Air Relative Humidity",
    "Zone Mean Air Temperature",
    "Zone Mean Radiant Temperature",
    "Site Outdoor Air Drybulb Temperature",
    "Site Outdoor Air Dewpoint Temperature",
    "Site Outdoor Air Wetbulb Temperature",
    "Site Outdoor Air Humidity Ratio",
    "Site Outdoor Air Relative Humidity",
    HEAT_INDEX_VARIABLE,
    "Zone Humidity Index",
    "Zone Infiltration Standard Density Volume Flow Rate",
    "Zone Infiltration Air Change Rate",
    "Zone Mechanical Ventilation Standard Density Volume Flow Rate",
    "Zone Mechanical Ventilation Air Changes per Hour",
    "Zone Ventilation Standard Density Volume Flow Rate",
    "Zone Ventilation Air Change Rate",
    "Site Wind Speed",
    "Site Outdoor Air Barometric Pressure",
    "Zone People Total Heating Energy",
    "Zone Lights Total Heating Energy",
    "Zone Electric Equipment Total Heating Energy",
    "Zone Windows Total Heat Gain Energy",
    "Zone Windows Total Heat Loss Energy",
    "Zone Infiltration Total Heat Gain Energy",
    "Zone Infiltration Total Heat Loss Energy",
    "Zone Ventilation Total Heat Loss Energy",
    "Zone Ventilation Total Heat Gain Energy",
    "Zone Windows Total Transmitted Solar Radiation Energy",
    "Zone Exterior Windows Total Transmitted Beam Solar Radiation Energy",
    "Zone Exterior Windows Total Transmitted Diffuse Solar Radiation Energy",
];

/// Renders `Output:Variable` IDF objects, one per line, all keys, hourly.
pub fn render_output_variables(variables: &[&str]) -> String {
    variables
        .iter()
        .map(|v| format!("Output:Variable,*,{v},Hourly;\n"))
        .collect()
}
