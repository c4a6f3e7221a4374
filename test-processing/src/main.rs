use std::{env, error::Error, fmt, fs, path::Path};
use math::G_TO_MS2;
use processing::{StepCounter, StepDetector, StepDetectorConfig};

static RESULTS_DIR: &str = "analysis";

/// Unit the accelerometer columns of the input CSV are in.
#[derive(Debug, Clone, Copy, PartialEq)]
enum InputUnits {
    MetersPerSecond2,
    G,
}

impl InputUnits {
    fn scale(&self) -> f32 {
        match self {
            Self::MetersPerSecond2 => 1.0,
            Self::G => G_TO_MS2,
        }
    }
}

#[derive(Debug)]
enum ReplayError {
    MissingInput,
    BadVariable { name: &'static str, value: String },
}

impl Error for ReplayError {}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::MissingInput => write!(f, "Expected CSV file to read samples from"),
            Self::BadVariable { name, value } => write!(f, "Can not parse {}={:?}", name, value),
        }
    }
}

/// Parses the variable if it is set, leaves `target` alone otherwise.
fn override_from<T, F>(lookup: &F, name: &'static str, target: &mut T) -> Result<(), ReplayError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = lookup(name) {
        *target = value.trim().parse().map_err(|_| ReplayError::BadVariable { name, value })?;
    }
    Ok(())
}

/// Builds the detector config and input units from `STEP_*` variables, anything not set keeps 
/// its default.
fn config_from<F>(lookup: F) -> Result<(StepDetectorConfig, InputUnits), Box<dyn Error>>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = StepDetectorConfig::default();
    override_from(&lookup, "STEP_GRAVITY_RING", &mut config.gravity_ring_capacity)?;
    override_from(&lookup, "STEP_VELOCITY_RING", &mut config.velocity_ring_capacity)?;
    override_from(&lookup, "STEP_THRESHOLD", &mut config.step_threshold)?;
    override_from(&lookup, "STEP_DELAY_NS", &mut config.step_delay_ns)?;
    config.validate()?;

    let units = match lookup("STEP_INPUT_UNITS").as_deref().map(str::trim) {
        None | Some("ms2") => InputUnits::MetersPerSecond2,
        Some("g") => InputUnits::G,
        Some(other) => return Err(ReplayError::BadVariable {
            name: "STEP_INPUT_UNITS",
            value: other.to_string(),
        }.into()),
    };

    Ok((config, units))
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let in_path = env::args().nth(1).ok_or(ReplayError::MissingInput)?;
    let in_path = Path::new(&in_path);
    let (config, units) = config_from(|name| env::var(name).ok())?;
    log::info!("Replaying {} with {:?} ({:?})", in_path.display(), config, units);

    // Every input CSV file gets its own folder in the results directory.
    let stem = in_path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
    let out_dir = Path::new(RESULTS_DIR).join(stem);
    fs::create_dir_all(&out_dir)?;

    let mut steps_file = csv::Writer::from_path(out_dir.join("steps.csv"))?;
    steps_file.write_record(["step", "time_ns"])?;

    let mut signal_file = csv::Writer::from_path(out_dir.join("signal.csv"))?;
    signal_file.write_record(["time_ns", "world_z.x", "world_z.y", "world_z.z", "residual", "velocity"])?;

    let counter = StepCounter::new();
    let mut detector = StepDetector::with_config(config)?;
    detector.register_listener(counter.clone());

    let mut samples = 0u64;
    let mut reader = csv::Reader::from_path(in_path)?;
    for result in reader.deserialize::<(i64, f32, f32, f32)>() {
        let (time_ns, x, y, z) = result?;
        let scale = units.scale();
        samples += 1;

        if let Some(event) = detector.update_accel(time_ns, x * scale, y * scale, z * scale) {
            steps_file.write_record(&[counter.count().to_string(), event.timestamp_ns.to_string()])?;
        }

        let world_z = detector.world_z;
        signal_file.write_record(&[
            time_ns.to_string(),
            world_z.x.to_string(),
            world_z.y.to_string(),
            world_z.z.to_string(),
            detector.vertical_residual.to_string(),
            detector.velocity_estimate().to_string(),
        ])?;
    }

    steps_file.flush()?;
    signal_file.flush()?;
    log::info!("{} samples, {} steps, results in {}", samples, counter.count(), out_dir.display());
    Ok(())
}

#[cfg(test)]
mod tests 
{
    use super::*;
    use std::collections::HashMap;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    pub fn test_defaults_without_variables() {
        let (config, units) = config_from(lookup_in(&[])).unwrap();
        assert_eq!(config, StepDetectorConfig::default());
        assert_eq!(units, InputUnits::MetersPerSecond2);
    }

    #[test]
    pub fn test_variables_override_defaults() {
        let (config, units) = config_from(lookup_in(&[
            ("STEP_GRAVITY_RING", "100"),
            ("STEP_VELOCITY_RING", " 5 "),
            ("STEP_THRESHOLD", "2.5"),
            ("STEP_DELAY_NS", "300000000"),
            ("STEP_INPUT_UNITS", "g"),
        ])).unwrap();

        assert_eq!(config.gravity_ring_capacity, 100);
        assert_eq!(config.velocity_ring_capacity, 5);
        assert_eq!(config.step_threshold, 2.5);
        assert_eq!(config.step_delay_ns, 300_000_000);
        assert_eq!(units, InputUnits::G);
        assert_eq!(units.scale(), G_TO_MS2);
    }

    #[test]
    pub fn test_unparsable_variable_is_an_error() {
        let err = config_from(lookup_in(&[("STEP_THRESHOLD", "fast")])).unwrap_err();
        assert_eq!(err.to_string(), "Can not parse STEP_THRESHOLD=\"fast\"");

        assert!(config_from(lookup_in(&[("STEP_INPUT_UNITS", "furlongs")])).is_err());
    }

    #[test]
    pub fn test_invalid_config_is_an_error() {
        let err = config_from(lookup_in(&[("STEP_VELOCITY_RING", "0")])).unwrap_err();
        assert_eq!(err.to_string(), "The velocity ring buffer needs a capacity of at least 1");
    }
}
