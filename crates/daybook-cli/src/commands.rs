use std::path::Path;

use anyhow::{Context, Result};
use daybook_cli::check::check_program;
use daybook_cli::config::{Config, load_config};
use daybook_cli::output::JsonLinesSender;
use daybook_ingest::FsContentSource;
use daybook_markup::validate;
use daybook_model::{ContentSource, Ordinal};
use daybook_nav::schedule::{current_day, days_to_deliver};
use daybook_nav::{BrowsePath, Message, Sender, day_selection, render, resolve};
use tracing::{info, info_span};

use crate::cli::{BrowseArgs, KeyboardArgs, ProgramArgs, RenderArgs, ScheduleArgs};
use crate::summary::print_browse_listing;
use crate::types::{CheckResult, ScheduleResult};

fn open_program(dir: &Path, config_path: Option<&Path>) -> Result<(FsContentSource, Config)> {
    let config = load_config(config_path, Some(dir)).context("load config")?;
    let source = FsContentSource::with_options(dir, config.discovery_options());
    Ok((source, config))
}

pub fn run_check(args: &ProgramArgs, config_path: Option<&Path>) -> Result<CheckResult> {
    let span = info_span!("check", program = %args.program_dir.display());
    let _guard = span.enter();
    let (source, config) = open_program(&args.program_dir, config_path)?;
    let reports =
        check_program(&source, &config.render_options()).context("read program")?;
    let has_errors = reports.iter().any(|r| r.has_errors());
    Ok(CheckResult {
        program_dir: args.program_dir.clone(),
        reports,
        has_errors,
    })
}

pub fn run_render(args: &RenderArgs, config_path: Option<&Path>) -> Result<()> {
    let day = Ordinal::new(args.day);
    let span = info_span!("render", day = %day);
    let _guard = span.enter();
    let (source, config) = open_program(&args.program.program_dir, config_path)?;
    let options = config.render_options();
    let program = source.list_program().context("read program")?;
    let state = resolve(&program, day).with_context(|| format!("resolve day {day}"))?;

    let mut sender = JsonLinesSender::stdout();
    if args.with_content {
        for id in &state.current.fragments {
            let fragment = source
                .read_fragment(id)
                .with_context(|| format!("read {id}"))?;
            let text = validate(&fragment)?;
            sender
                .send(Message::new(text, options.wants_web_preview))
                .context("write message")?;
        }
    }
    let message = render(&state, &options)?;
    sender.send(message).context("write message")?;
    info!(messages = sender.sent(), "rendered day");
    Ok(())
}

pub fn run_keyboard(args: &KeyboardArgs, config_path: Option<&Path>) -> Result<()> {
    let (source, config) = open_program(&args.program.program_dir, config_path)?;
    let program = source.list_program().context("read program")?;
    let days = match args.until_day {
        Some(max) => program.available_ordinals(Ordinal::new(max)),
        None => program.ordinals(),
    };
    let keyboard = day_selection(
        &days,
        args.page,
        config.keyboard_layout(),
        &config.render_options(),
    );
    println!(
        "{}",
        serde_json::to_string_pretty(&keyboard).context("serialize keyboard")?
    );
    Ok(())
}

pub fn run_schedule(args: &ScheduleArgs) -> ScheduleResult {
    let today = args
        .today
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    ScheduleResult {
        current_day: current_day(args.begin, today),
        due: days_to_deliver(args.begin, args.last_delivered, today),
    }
}

pub fn run_browse(args: &BrowseArgs, config_path: Option<&Path>) -> Result<()> {
    let (source, _config) = open_program(&args.root, config_path)?;
    let path = BrowsePath::parse(&args.path)?;
    let listing = source
        .browse(&path)
        .with_context(|| format!("browse '{path}'"))?;
    let descriptor = listing
        .descriptor
        .as_ref()
        .map(validate)
        .transpose()?;
    print_browse_listing(&listing, descriptor.as_ref());
    Ok(())
}
