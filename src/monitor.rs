use std::io::Write;

use anyhow::{Context, Result};
use chrono::{DateTime, Local, Utc};
use colored::Colorize;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{info, warn};

use crate::audio::discovery::{
    self, ApplicationRegistry, AudioProcessDiscovery, BundleClassifier, ProcessInfoSource,
};
use crate::audio::hardware::HardwareRegistry;
use crate::audio::{ProcessDescriptor, ProcessKind};
use crate::config::{MonitorConfig, ReportMode};

/// Anything that can answer "which processes are producing audio right now"
pub trait ActiveProcessSource {
    fn enumerate_active_audio_processes(&self) -> discovery::Result<Vec<ProcessDescriptor>>;
}

impl<R, A, P, C> ActiveProcessSource for AudioProcessDiscovery<R, A, P, C>
where
    R: HardwareRegistry,
    A: ApplicationRegistry,
    P: ProcessInfoSource,
    C: BundleClassifier,
{
    fn enumerate_active_audio_processes(&self) -> discovery::Result<Vec<ProcessDescriptor>> {
        AudioProcessDiscovery::enumerate_active_audio_processes(self)
    }
}

#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct MonitorStats {
    pub passes: u64,
    pub failed_passes: u64,
    pub last_active_count: usize,
    pub last_scan_at: Option<DateTime<Utc>>,
}

/// Periodic scan driver
///
/// Runs one blocking scan per interval tick. A failed pass is logged and
/// counted; the loop always moves on to the next tick. Ctrl-C interrupts the
/// wait between passes, never a pass in progress.
pub struct ProcessMonitor<S> {
    source: S,
    config: MonitorConfig,
    stats: MonitorStats,
}

impl<S: ActiveProcessSource> ProcessMonitor<S> {
    /// A zero `scan_interval` falls back to the default period.
    pub fn new(source: S, mut config: MonitorConfig) -> Self {
        if config.scan_interval.is_zero() {
            let fallback = MonitorConfig::default().scan_interval;
            warn!("Zero scan interval configured, using {:?}", fallback);
            config.scan_interval = fallback;
        }
        Self {
            source,
            config,
            stats: MonitorStats::default(),
        }
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    pub fn stats(&self) -> &MonitorStats {
        &self.stats
    }

    /// Run until Ctrl-C (or `max_passes`), reporting to stdout
    pub async fn run(&mut self) -> Result<MonitorStats> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run_with_output(&mut out).await
    }

    pub async fn run_with_output<W: Write>(&mut self, out: &mut W) -> Result<MonitorStats> {
        let mut ticker = interval(self.config.scan_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let shutdown = tokio::signal::ctrl_c();
        tokio::pin!(shutdown);

        info!(
            "🔍 Starting process monitor (every {:?}, {:?} report)",
            self.config.scan_interval, self.config.report_mode
        );

        loop {
            if let Some(max) = self.config.max_passes {
                if self.stats.passes >= max {
                    break;
                }
            }

            tokio::select! {
                _ = ticker.tick() => {
                    self.scan_once(out)?;
                }
                result = &mut shutdown => {
                    if let Err(e) = result {
                        warn!("Failed to listen for Ctrl-C: {}", e);
                    }
                    info!("🛑 Shutdown requested");
                    break;
                }
            }
        }

        info!(
            "Process monitor stopped after {} passes ({} failed)",
            self.stats.passes, self.stats.failed_passes
        );
        Ok(self.stats.clone())
    }

    /// One scan pass. Only output errors are returned; scan errors are absorbed.
    pub fn scan_once<W: Write>(&mut self, out: &mut W) -> Result<()> {
        self.stats.passes += 1;
        self.stats.last_scan_at = Some(Utc::now());

        match self.source.enumerate_active_audio_processes() {
            Ok(active) => {
                self.stats.last_active_count = active.len();
                self.report(out, &active)
            }
            Err(e) => {
                self.stats.failed_passes += 1;
                warn!("❌ Scan pass {} failed: {}", self.stats.passes, e);
                if self.config.report_mode == ReportMode::Summary {
                    writeln!(out, "Error: {}", e).context("writing scan report")?;
                }
                Ok(())
            }
        }
    }

    fn report<W: Write>(&self, out: &mut W, active: &[ProcessDescriptor]) -> Result<()> {
        match self.config.report_mode {
            ReportMode::Summary => {
                let any = !active.is_empty();
                let answer = if any {
                    "true".green().bold()
                } else {
                    "false".normal()
                };
                writeln!(out, "Any running? {}", answer)
            }
            ReportMode::Detailed => {
                let now: DateTime<Local> = Local::now();
                writeln!(
                    out,
                    "{} {} active audio process(es)",
                    now.format("[%H:%M:%S]").to_string().dimmed(),
                    active.len()
                )?;
                for process in active {
                    writeln!(out, "  {}", describe_line(process))?;
                }
                Ok(())
            }
            ReportMode::Json => {
                let json = serde_json::to_string(active).context("serializing scan result")?;
                writeln!(out, "{}", json)
            }
        }
        .context("writing scan report")
    }
}

fn describe_line(process: &ProcessDescriptor) -> String {
    let kind = match process.kind {
        ProcessKind::Application => "app".cyan(),
        ProcessKind::Process => "process".yellow(),
    };
    let bundle = process.bundle_identifier.as_deref().unwrap_or("-");
    format!(
        "▶ {} (pid {}, {}) {}",
        process.display_name.bold(),
        process.pid,
        kind,
        bundle.dimmed()
    )
}
