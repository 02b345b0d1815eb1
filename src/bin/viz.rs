use std::time::Instant;

use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints, Points};

use pendulum_sim::scenario::ScenarioConfig;
use pendulum_sim::system::{Member, PendulumSystem};

fn main() -> eframe::Result {
    let scenario = match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path).unwrap_or_else(|e| {
                eprintln!("failed to read {path}: {e}");
                std::process::exit(1);
            });
            ScenarioConfig::from_yaml(&text).unwrap_or_else(|e| {
                eprintln!("failed to parse {path}: {e}");
                std::process::exit(1);
            })
        }
        None => ScenarioConfig::classic_double(),
    };
    let system = scenario.build().unwrap_or_else(|e| {
        eprintln!("simulation failed: {e}");
        std::process::exit(1);
    });

    let app = PendulumViz {
        times: system.time_grid().iter().copied().collect(),
        system,
        started: Instant::now(),
    };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 640.0]),
        ..Default::default()
    };
    eframe::run_native("Pendulum Simulator", options, Box::new(|_| Ok(Box::new(app))))
}

struct PendulumViz {
    system: PendulumSystem,
    times: Vec<f64>,
    started: Instant,
}

impl PendulumViz {
    /// Grid index for the current wall-clock time, looping at the end.
    fn frame(&self) -> usize {
        let n = self.times.len();
        match self.times.last() {
            Some(&t_end) if n >= 2 => {
                let t = self.started.elapsed().as_secs_f64() % t_end;
                (((t / t_end) * (n - 1) as f64) as usize).min(n - 1)
            }
            _ => 0,
        }
    }
}

impl eframe::App for PendulumViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let i = self.frame();
        let bound = self.system.max_length() + 0.5;
        let double = self.system.has_double();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading(format!(
                "{} {} pendulum(s)",
                self.system.len(),
                if double { "double" } else { "single" }
            ));
            ui.label(format!("time = {:.1} s", self.times.get(i).copied().unwrap_or(0.0)));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let half_w = available.x / 2.0 - 8.0;

            ui.horizontal(|ui| {
                // Pendulum frame with the trail of the outer bob
                ui.vertical(|ui| {
                    ui.label("Motion");
                    Plot::new("motion")
                        .width(half_w)
                        .height(available.y - 24.0)
                        .data_aspect(1.0)
                        .include_x(-bound)
                        .include_x(bound)
                        .include_y(-bound)
                        .include_y(bound)
                        .show(ui, |plot_ui| {
                            for (m, pos) in self.system.positions().iter().enumerate() {
                                let (rod, trail): (Vec<[f64; 2]>, Vec<[f64; 2]>) = if double {
                                    (
                                        vec![[0.0, 0.0], [pos[(i, 0)], pos[(i, 2)]], [pos[(i, 1)], pos[(i, 3)]]],
                                        (0..=i).map(|r| [pos[(r, 1)], pos[(r, 3)]]).collect(),
                                    )
                                } else {
                                    (
                                        vec![[0.0, 0.0], [pos[(i, 0)], pos[(i, 1)]]],
                                        (0..=i).map(|r| [pos[(r, 0)], pos[(r, 1)]]).collect(),
                                    )
                                };
                                plot_ui.line(Line::new(format!("path {m}"), PlotPoints::from(trail)));
                                plot_ui.line(Line::new(format!("pendulum {m}"), PlotPoints::from(rod)));
                            }
                        });
                });

                // Phase space of the first member (outer link for doubles)
                ui.vertical(|ui| {
                    ui.label("Phase space (theta wrapped to (-pi, pi])");
                    let phase = self
                        .system
                        .members()
                        .first()
                        .map(Member::phase_space)
                        .unwrap_or_default();
                    let upto: Vec<[f64; 2]> = phase.into_iter().take(i + 1).collect();
                    Plot::new("phase")
                        .width(half_w)
                        .height(available.y - 24.0)
                        .x_axis_label("theta (rad)")
                        .y_axis_label("omega (rad/s)")
                        .show(ui, |plot_ui| {
                            plot_ui.points(Points::new("phase", PlotPoints::from(upto)));
                        });
                });
            });
        });

        ctx.request_repaint();
    }
}
