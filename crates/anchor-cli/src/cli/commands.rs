use super::CliError;
use anchor_core::domain::{
    DEFAULT_GROUND_KM, DEFAULT_HEIGHT_KM, DEFAULT_INJECTION_KM, DEFAULT_THINNING,
};
use anchor_core::{InstallLayout, ShowerKind, ShowerRequest, Task, create_shower};
use anyhow::Context;
use std::path::PathBuf;

#[derive(clap::Args)]
pub(super) struct ShowerArgs {
    /// Task name; also the task directory name under the run root
    #[arg(long)]
    name: String,

    /// Primary particle identifier (e.g. proton, iron)
    #[arg(long)]
    particle: String,

    /// Primary energy in log10(eV)
    #[arg(long, allow_negative_numbers = true)]
    energy: f64,

    /// Zenith angle of the shower axis in degrees
    #[arg(long)]
    zenith: f64,

    /// Geographic azimuth of the shower axis in degrees
    #[arg(long, allow_negative_numbers = true)]
    azimuth: f64,

    /// Latitude where the shower axis meets the ground, degrees
    #[arg(long, allow_negative_numbers = true)]
    lat: f64,

    /// Longitude where the shower axis meets the ground, degrees
    #[arg(long, allow_negative_numbers = true)]
    lon: f64,

    /// Ground altitude in km
    #[arg(long, default_value_t = DEFAULT_GROUND_KM, allow_negative_numbers = true)]
    ground: f64,

    /// Relative thinning level
    #[arg(long, default_value_t = DEFAULT_THINNING)]
    thinning: f64,

    /// Reuse an existing task directory and ignore creation failures
    #[arg(long)]
    restart: bool,

    /// Kind-specific default input file loaded after the common defaults
    #[arg(long = "default", value_name = "PATH")]
    default_template: Option<PathBuf>,

    /// Simulation binary to bind the task to
    #[arg(long, value_name = "PATH")]
    program: Option<PathBuf>,

    /// Echo the rendered input deck to stdout
    #[arg(long)]
    print: bool,
}

#[derive(clap::Args)]
pub(super) struct DirectArgs {
    #[command(flatten)]
    shower: ShowerArgs,

    /// Injection altitude in km
    #[arg(long, default_value_t = DEFAULT_INJECTION_KM)]
    injection: f64,
}

#[derive(clap::Args)]
pub(super) struct ReflectedArgs {
    #[command(flatten)]
    shower: ShowerArgs,

    /// Injection altitude in km
    #[arg(long, default_value_t = DEFAULT_INJECTION_KM)]
    injection: f64,

    /// Binary model; 'AiresQ' selects the AiresQ build
    #[arg(long)]
    model: Option<String>,
}

#[derive(clap::Args)]
pub(super) struct StratosphericArgs {
    #[command(flatten)]
    shower: ShowerArgs,

    /// Height in km at which the trajectory crosses the z-axis
    #[arg(long, default_value_t = DEFAULT_HEIGHT_KM)]
    height: f64,

    /// Binary model; 'AiresQ' selects the AiresQ build
    #[arg(long)]
    model: Option<String>,
}

impl ShowerArgs {
    fn into_request(self) -> (ShowerRequest, bool) {
        let mut request = ShowerRequest::new(
            self.name,
            self.particle,
            self.energy,
            self.zenith,
            self.azimuth,
            self.lat,
            self.lon,
        )
        .with_ground(self.ground)
        .with_thinning(self.thinning)
        .with_restart(self.restart);
        request.default = self.default_template;
        request.program = self.program;
        (request, self.print)
    }
}

pub(super) fn run_direct_command(
    layout: &InstallLayout,
    args: DirectArgs,
) -> Result<i32, CliError> {
    let (request, print) = args.shower.into_request();
    let request = request.with_injection(args.injection);
    create_and_write(layout, ShowerKind::Direct, &request, print)
}

pub(super) fn run_reflected_command(
    layout: &InstallLayout,
    args: ReflectedArgs,
) -> Result<i32, CliError> {
    let (mut request, print) = args.shower.into_request();
    request.injection = args.injection;
    request.model = args.model;
    create_and_write(layout, ShowerKind::Reflected, &request, print)
}

pub(super) fn run_stratospheric_command(
    layout: &InstallLayout,
    args: StratosphericArgs,
) -> Result<i32, CliError> {
    let (mut request, print) = args.shower.into_request();
    request.height = args.height;
    request.model = args.model;
    create_and_write(layout, ShowerKind::Stratospheric, &request, print)
}

pub(super) fn run_show_layout_command(layout: &InstallLayout) -> Result<i32, CliError> {
    let rendered =
        serde_json::to_string_pretty(layout).context("failed to serialize install layout")?;
    println!("{}", rendered);
    Ok(0)
}

fn create_and_write(
    layout: &InstallLayout,
    kind: ShowerKind,
    request: &ShowerRequest,
    print: bool,
) -> Result<i32, CliError> {
    let task: Task = create_shower(layout, kind, request)?;
    let input_file = task.write_input_file()?;
    let runnable = task.runnable()?;

    if print {
        print!("{}", task.render());
    }
    println!(
        "Created {} shower task '{}' at {}",
        kind,
        request.name,
        input_file.display()
    );
    println!("Run with: {}", runnable.shell_line());
    Ok(0)
}
