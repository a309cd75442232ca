use std::time::Instant;

use eframe::egui;

use crate::routes::Route;

const ENTRANCE_DELAY: f32 = 0.3;
const ENTRANCE_STAGGER: f32 = 0.2;
const ENTRANCE_DURATION: f32 = 0.8;
const SCROLL_LATCH_PX: f32 = 10.0;
const SCROLL_JUMP_GAP: f32 = 100.0;

const HERO_RED: egui::Color32 = egui::Color32::from_rgb(127, 29, 29);
const HERO_ACCENT: egui::Color32 = egui::Color32::from_rgb(254, 202, 202);
const HERO_CTA_TEXT: egui::Color32 = egui::Color32::from_rgb(155, 44, 44);

const HERO_STATS: [(&str, &str); 4] = [
    ("50+", "Blood Camps"),
    ("9800+", "Lives Impacted"),
    ("15K+", "Eye Checkups"),
    ("20K+", "People Reached"),
];

pub enum HeroAction {
    Navigate(Route),
    ScrollTo(f32),
}

/// The landing banner: staged entrance, scroll-down prompt and the two
/// calls to action.
#[derive(Debug, Clone)]
pub struct HeroState {
    entered_at: Instant,
    has_scrolled: bool,
}

impl HeroState {
    pub fn new() -> Self {
        Self::anchored(Instant::now())
    }

    pub fn anchored(now: Instant) -> Self {
        Self {
            entered_at: now,
            has_scrolled: false,
        }
    }

    pub fn mount(&mut self) {
        *self = Self::new();
    }

    /// Latches once the page moves past the threshold; scrolling back up
    /// does not unlatch.
    pub fn note_scroll_offset(&mut self, offset: f32) {
        if offset > SCROLL_LATCH_PX {
            self.has_scrolled = true;
        }
    }

    /// The prompt hides after scrolling only on narrow layouts; wide
    /// layouts keep it.
    pub fn scroll_prompt_visible(&self, narrow: bool) -> bool {
        !(narrow && self.has_scrolled)
    }

    /// 0..1 opacity of the `index`-th staged block.
    pub fn entrance_alpha(&self, index: usize, now: Instant) -> f32 {
        let elapsed = now.duration_since(self.entered_at).as_secs_f32();
        let start = ENTRANCE_DELAY + ENTRANCE_STAGGER * index as f32;
        ((elapsed - start) / ENTRANCE_DURATION).clamp(0.0, 1.0)
    }

    pub fn scroll_jump_target(viewport_height: f32) -> f32 {
        (viewport_height - SCROLL_JUMP_GAP).max(0.0)
    }

    pub fn render(&mut self, ui: &mut egui::Ui, narrow: bool) -> Option<HeroAction> {
        let mut action = None;
        let now = Instant::now();
        let ctx = ui.ctx().clone();
        let viewport_height = ctx.screen_rect().height();

        egui::Frame::default()
            .fill(HERO_RED)
            .inner_margin(egui::Margin::symmetric(24, 48))
            .show(ui, |ui| {
                ui.set_min_height((viewport_height - 120.0).max(420.0));
                ui.vertical_centered(|ui| {
                    let headline_alpha = self.entrance_alpha(0, now);
                    ui.scope(|ui| {
                        ui.set_opacity(headline_alpha);
                        ui.add_space(32.0);
                        egui::Frame::default()
                            .fill(egui::Color32::from_white_alpha(24))
                            .corner_radius(egui::CornerRadius::same(16))
                            .inner_margin(egui::Margin::symmetric(14, 6))
                            .show(ui, |ui| {
                                ui.label(
                                    egui::RichText::new("♥ Transforming Lives Since 2010")
                                        .size(13.0)
                                        .color(egui::Color32::WHITE),
                                );
                            });
                        ui.add_space(20.0);
                        ui.label(
                            egui::RichText::new("Transforming Lives,")
                                .size(44.0)
                                .strong()
                                .color(egui::Color32::WHITE),
                        );
                        ui.label(
                            egui::RichText::new("Empowering Communities")
                                .size(44.0)
                                .strong()
                                .color(HERO_ACCENT),
                        );
                        ui.add_space(16.0);
                        ui.label(
                            egui::RichText::new(
                                "Join us in our mission to make a difference through blood \
                                 donation, healthcare support, and community service.",
                            )
                            .size(18.0)
                            .color(egui::Color32::from_white_alpha(230)),
                        );
                    });

                    ui.add_space(28.0);
                    let cta_alpha = self.entrance_alpha(1, now);
                    ui.scope(|ui| {
                        ui.set_opacity(cta_alpha);
                        let total = 2.0 * 190.0 + 16.0;
                        ui.horizontal(|ui| {
                            ui.add_space(((ui.available_width() - total) / 2.0).max(0.0));
                            let involved = egui::Button::new(
                                egui::RichText::new("Get Involved →")
                                    .size(16.0)
                                    .strong()
                                    .color(HERO_CTA_TEXT),
                            )
                            .fill(egui::Color32::WHITE)
                            .corner_radius(egui::CornerRadius::same(8))
                            .min_size(egui::vec2(190.0, 48.0));
                            if ui.add(involved).clicked() {
                                action = Some(HeroAction::Navigate(Route::Contact));
                            }
                            ui.add_space(16.0);
                            let donate = egui::Button::new(
                                egui::RichText::new("Donate Now ♥")
                                    .size(16.0)
                                    .strong()
                                    .color(egui::Color32::WHITE),
                            )
                            .fill(egui::Color32::TRANSPARENT)
                            .stroke(egui::Stroke::new(2.0, egui::Color32::WHITE))
                            .corner_radius(egui::CornerRadius::same(8))
                            .min_size(egui::vec2(190.0, 48.0));
                            if ui.add(donate).clicked() {
                                action = Some(HeroAction::Navigate(Route::Donations));
                            }
                        });
                    });

                    ui.add_space(40.0);
                    let stats_alpha = self.entrance_alpha(2, now);
                    ui.scope(|ui| {
                        ui.set_opacity(stats_alpha);
                        ui.columns(HERO_STATS.len(), |columns| {
                            for (column, (count, label)) in
                                columns.iter_mut().zip(HERO_STATS.iter())
                            {
                                egui::Frame::default()
                                    .fill(egui::Color32::from_white_alpha(24))
                                    .corner_radius(egui::CornerRadius::same(16))
                                    .inner_margin(egui::Margin::same(14))
                                    .show(column, |ui| {
                                        ui.vertical_centered(|ui| {
                                            ui.label(
                                                egui::RichText::new(*count)
                                                    .size(28.0)
                                                    .strong()
                                                    .color(HERO_ACCENT),
                                            );
                                            ui.label(
                                                egui::RichText::new(*label)
                                                    .size(13.0)
                                                    .color(egui::Color32::from_white_alpha(230)),
                                            );
                                        });
                                    });
                            }
                        });
                    });
                    ui.add_space(32.0);
                });
            });

        if self.entrance_alpha(2, now) < 1.0 {
            ctx.request_repaint();
        }

        if self.scroll_prompt_visible(narrow) {
            let time = ui.input(|input| input.time);
            let bob = ((time * 3.0).sin() as f32) * 4.0;
            let pos = egui::pos2(
                ctx.screen_rect().center().x,
                ctx.screen_rect().bottom() - 48.0 + bob,
            );
            egui::Area::new(egui::Id::new("hero_scroll_prompt"))
                .order(egui::Order::Foreground)
                .pivot(egui::Align2::CENTER_CENTER)
                .fixed_pos(pos)
                .show(&ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(
                            egui::RichText::new("Scroll Down")
                                .size(13.0)
                                .color(egui::Color32::from_white_alpha(200)),
                        );
                        let chevron = egui::Button::new(
                            egui::RichText::new("▼")
                                .size(18.0)
                                .color(egui::Color32::from_white_alpha(200)),
                        )
                        .frame(false);
                        if ui.add(chevron).clicked() {
                            action = Some(HeroAction::ScrollTo(Self::scroll_jump_target(
                                viewport_height,
                            )));
                        }
                    });
                });
            ctx.request_repaint();
        }

        action
    }
}

impl Default for HeroState {
    fn default() -> Self {
        Self::new()
    }
}
