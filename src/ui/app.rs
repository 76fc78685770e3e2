//! Main application for the Tic-Tac-Toe GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, ScrollArea, SidePanel, TopBottomPanel};

use super::board_view::BoardView;
use super::game_state::{GameState, Status};
use super::theme::*;
use crate::board::{Player, Pos};
use crate::rules::AchievementTier;
use crate::Config;

/// Main Tic-Tac-Toe application
pub struct TicTacToeApp {
    state: GameState,
    board_view: BoardView,
}

impl Default for TicTacToeApp {
    fn default() -> Self {
        Self {
            state: GameState::default(),
            board_view: BoardView::default(),
        }
    }
}

impl TicTacToeApp {
    /// Create a new app from the command-line configuration
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &Config) -> Self {
        Self {
            state: GameState::new(config.show_achievement_info),
            ..Self::default()
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.state.reset();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.state.show_achievement_info, "Achievement info (A)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("Games played: {}", self.state.results().len()));
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(260.0)
            .max_width(320.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(8.0))
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    ui.add_space(8.0);
                    self.render_status_card(ui);
                    ui.add_space(10.0);
                    self.render_chances_card(ui);
                    ui.add_space(10.0);
                    self.render_actions_card(ui);
                    ui.add_space(10.0);
                    self.render_moves_card(ui);
                    ui.add_space(10.0);
                    self.render_results_card(ui);
                    ui.add_space(10.0);
                    self.render_achievements_card(ui);
                });
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn card_title(ui: &mut egui::Ui, title: &str) {
        ui.label(RichText::new(title).size(10.0).color(TEXT_MUTED));
        ui.add_space(6.0);
    }

    /// Render status card
    fn render_status_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            Self::card_title(ui, "STATUS");

            let status = self.state.status();
            let color = match status {
                Status::Winner(_) => WIN_HIGHLIGHT,
                Status::Draw => TEXT_SECONDARY,
                Status::NextPlayer(player) => mark_color(player),
            };
            ui.label(RichText::new(status.to_string()).size(18.0).strong().color(color));
        });
    }

    /// Render win-chance card
    fn render_chances_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            Self::card_title(ui, "WIN CHANCE");

            for (player, chance) in self.state.win_chances() {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(player_symbol(player)).size(14.0));
                    ui.label(
                        RichText::new(format!("{player} win chance: {chance}%"))
                            .size(13.0)
                            .color(TEXT_PRIMARY),
                    );
                });
                ui.add(
                    egui::ProgressBar::new(f32::from(chance) / 100.0)
                        .desired_height(6.0)
                        .fill(mark_color(player)),
                );
                ui.add_space(4.0);
            }
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            Self::card_title(ui, "ACTIONS");

            let btn_frame = Frame::new()
                .fill(BUTTON_BG)
                .corner_radius(CornerRadius::same(6))
                .inner_margin(8.0);

            btn_frame.show(ui, |ui| {
                let label = egui::Label::new(RichText::new("🔄 New Game").size(12.0).color(TEXT_PRIMARY))
                    .sense(egui::Sense::click());
                if ui.add(label).clicked() {
                    self.state.reset();
                }
            });
        });
    }

    /// Render move-jump list
    fn render_moves_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            Self::card_title(ui, "MOVES");

            let mut target = None;
            for entry in self.state.move_list() {
                let fill = if entry.is_current { BUTTON_ACTIVE } else { BUTTON_BG };
                let button = egui::Button::new(
                    RichText::new(entry.label)
                        .size(12.0)
                        .color(TEXT_PRIMARY),
                )
                .fill(fill);
                if ui.add(button).clicked() {
                    target = Some(entry.ply);
                }
            }

            if let Some(ply) = target {
                self.state.jump_to(ply);
            }
        });
    }

    /// Render game result log
    fn render_results_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            Self::card_title(ui, "GAME RESULTS");

            if self.state.results().is_empty() {
                ui.label(RichText::new("No finished games").size(11.0).color(TEXT_MUTED));
            }
            for record in self.state.results() {
                ui.label(RichText::new(record.to_string()).size(12.0).color(TEXT_SECONDARY));
            }
        });
    }

    /// Render achievements card; clicking it toggles the tier table
    fn render_achievements_card(&mut self, ui: &mut egui::Ui) {
        let response = Self::card_frame()
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                Self::card_title(ui, "ACHIEVEMENTS (click)");

                for player in Player::ALL {
                    ui.label(
                        RichText::new(format!(
                            "{} {player} wins: {}",
                            player_symbol(player),
                            self.state.wins(player)
                        ))
                        .size(12.0)
                        .color(TEXT_PRIMARY),
                    );
                }
                ui.add_space(4.0);
                for player in Player::ALL {
                    let tier = self.state.achievement(player);
                    ui.label(
                        RichText::new(format!("🎖 {player} award: {}", tier_label(tier)))
                            .size(12.0)
                            .color(TEXT_PRIMARY),
                    );
                }

                if self.state.show_achievement_info {
                    ui.separator();
                    for tier in AchievementTier::AWARDS.into_iter().rev() {
                        ui.label(
                            RichText::new(format!(
                                "{} {} wins → {tier}",
                                tier.medal(),
                                tier.threshold()
                            ))
                            .size(11.0)
                            .color(TEXT_SECONDARY),
                        );
                    }
                }
            })
            .response;

        if response.interact(egui::Sense::click()).clicked() {
            self.state.toggle_achievement_info();
        }
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                let clicked = self.board_view.show(
                    ui,
                    self.state.board(),
                    self.state.history().next_player(),
                    self.state.last_move(),
                    self.state.winning_line(),
                    self.state.is_game_over(),
                );

                if let Some(pos) = clicked {
                    self.state.play(pos);
                }
            });
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        const CELL_KEYS: [egui::Key; 9] = [
            egui::Key::Num1,
            egui::Key::Num2,
            egui::Key::Num3,
            egui::Key::Num4,
            egui::Key::Num5,
            egui::Key::Num6,
            egui::Key::Num7,
            egui::Key::Num8,
            egui::Key::Num9,
        ];

        ctx.input(|i| {
            // 1-9 - Play the matching cell, row-major
            for (idx, key) in CELL_KEYS.into_iter().enumerate() {
                if i.key_pressed(key) {
                    if let Some(pos) = Pos::from_index(idx) {
                        self.state.play(pos);
                    }
                }
            }

            // Left/Right - Scrub history
            if i.key_pressed(egui::Key::ArrowLeft) {
                self.state.step_back();
            }
            if i.key_pressed(egui::Key::ArrowRight) {
                self.state.step_forward();
            }

            // A - Toggle achievement info
            if i.key_pressed(egui::Key::A) {
                self.state.toggle_achievement_info();
            }

            // N - New game
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }
        });
    }
}

fn player_symbol(player: Player) -> &'static str {
    match player {
        Player::X => "❌",
        Player::O => "⭕",
    }
}

fn tier_label(tier: AchievementTier) -> String {
    match tier {
        AchievementTier::Unranked => tier.to_string(),
        _ => format!("{} {tier}", tier.medal()),
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}
