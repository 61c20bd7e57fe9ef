//! Main application for the Gomoku GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::{BoardOverlay, BoardView};
use super::session::Session;
use super::theme::*;
use crate::engine::{Difficulty, SearchType};
use crate::game::GameOutcome;
use crate::{EngineConfig, Stone};

/// Main Gomoku application
pub struct GomokuApp {
    session: Session,
    board_view: BoardView,
    /// Difficulty used for the next new game
    selected_difficulty: Difficulty,
    show_debug: bool,
}

impl GomokuApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        config: EngineConfig,
        difficulty: Difficulty,
        human_color: Stone,
    ) -> Self {
        Self {
            session: Session::new(config, difficulty, human_color),
            board_view: BoardView::default(),
            selected_difficulty: difficulty,
            show_debug: true,
        }
    }

    fn new_game(&mut self) {
        self.session.new_game(self.selected_difficulty);
    }

    fn new_game_as(&mut self, human_color: Stone) {
        self.session.new_game_as(human_color, self.selected_difficulty);
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (You: Black)").clicked() {
                        self.new_game_as(Stone::Black);
                        ui.close_menu();
                    }
                    if ui.button("New Game (You: White)").clicked() {
                        self.new_game_as(Stone::White);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo").clicked() {
                        self.session.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("Difficulty", |ui| {
                    for difficulty in Difficulty::ALL {
                        if ui
                            .radio_value(&mut self.selected_difficulty, difficulty, difficulty_title(difficulty))
                            .clicked()
                        {
                            ui.close_menu();
                        }
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let game = &self.session.game;
                    ui.label(format!(
                        "You: {} | Monkey: {}",
                        color_title(game.human_color()),
                        difficulty_title(game.difficulty())
                    ));
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_timer_card(ui);
                ui.add_space(10.0);

                self.render_difficulty_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(outcome) = self.session.game.outcome().cloned() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, &outcome);
                }

                if let Some(msg) = &self.session.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            let rules = self.session.game.rules();
            ui.label(
                RichText::new(format!(
                    "{0}x{0} board, {1} in a row vs. the monkey",
                    rules.board_size, rules.win_length
                ))
                .size(11.0)
                .color(TEXT_MUTED),
            );
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let game = &self.session.game;
            let is_black = game.current() == Stone::Black;
            let (fill, rim) = if is_black {
                (BLACK_STONE, BLACK_STONE_HIGHLIGHT)
            } else {
                (WHITE_STONE, WHITE_STONE_SHADOW)
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 20.0, fill);
                ui.painter()
                    .circle_stroke(rect.center(), 20.0, egui::Stroke::new(2.0, rim));

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(color_title(game.current()).to_uppercase())
                            .size(18.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );

                    let status = if self.session.is_ai_thinking() {
                        ("Monkey thinking...", TIMER_WARNING)
                    } else if game.is_over() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else if game.is_human_turn() {
                        ("Your turn", TIMER_NORMAL)
                    } else {
                        ("Monkey's turn", TEXT_SECONDARY)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Render timer card
    fn render_timer_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TIMER").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(elapsed) = self.session.ai_thinking_elapsed() {
                let secs = elapsed.as_secs_f32();
                let color = if secs < 0.3 {
                    TIMER_NORMAL
                } else if secs < 0.5 {
                    TIMER_WARNING
                } else {
                    TIMER_CRITICAL
                };
                ui.label(RichText::new(format!("{secs:.2}s")).size(28.0).strong().color(color));
            } else {
                let elapsed = self.session.move_timer.elapsed();
                ui.label(
                    RichText::new(format!("{:.1}s", elapsed.as_secs_f32()))
                        .size(24.0)
                        .color(TEXT_PRIMARY),
                );
            }

            if let Some(ai_time) = self.session.move_timer.ai_thinking_time {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Last monkey move: {:.3}s", ai_time.as_secs_f32()))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
            }
        });
    }

    /// Difficulty picker; takes effect on the next new game
    fn render_difficulty_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("DIFFICULTY").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                for difficulty in Difficulty::ALL {
                    let selected = self.selected_difficulty == difficulty;
                    let fill = if selected { BUTTON_ACTIVE } else { BUTTON_BG };
                    Frame::new()
                        .fill(fill)
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(8.0)
                        .show(ui, |ui| {
                            let label = RichText::new(difficulty_title(difficulty)).size(12.0).color(TEXT_PRIMARY);
                            if ui.add(egui::Label::new(label).sense(egui::Sense::click())).clicked() {
                                self.selected_difficulty = difficulty;
                            }
                        });
                }
            });

            if self.selected_difficulty != self.session.game.difficulty() {
                ui.add_space(6.0);
                ui.label(RichText::new("Applies to the next game (N)").size(10.0).color(TEXT_SECONDARY));
            }
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let btn_frame = Frame::new()
                    .fill(BUTTON_BG)
                    .corner_radius(CornerRadius::same(6))
                    .inner_margin(8.0);

                btn_frame.show(ui, |ui| {
                    if action_label(ui, "New Game") {
                        self.new_game();
                    }
                });
                ui.add_space(4.0);
                btn_frame.show(ui, |ui| {
                    if action_label(ui, "Undo") {
                        self.session.undo();
                    }
                });
                ui.add_space(4.0);
                btn_frame.show(ui, |ui| {
                    if action_label(ui, "Hint") {
                        self.session.request_suggestion();
                    }
                });
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.session.game.history().len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render debug card
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("MONKEY DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let Some(result) = &self.session.last_ai_result else {
                ui.label(RichText::new("Waiting for the monkey...").size(10.0).color(TEXT_MUTED));
                return;
            };

            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(search_type_title(result.search_type))
                            .size(11.0)
                            .strong()
                            .color(TIMER_NORMAL),
                    );
                    ui.label(RichText::new(format!("Score: {}", result.score)).size(10.0).color(TEXT_SECONDARY));
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(format!("{}ms", result.time_ms)).size(10.0).color(TEXT_SECONDARY));
                        ui.label(RichText::new(format!("{} nodes", result.nodes)).size(10.0).color(TEXT_MUTED));
                    });
                });
            });

            let pos = result.best_move;
            let col = (b'A' + pos.col) as char;
            let row = self.session.game.board().size() - pos.row as usize;
            ui.add_space(4.0);
            ui.label(RichText::new(format!("-> {col}{row}")).size(12.0).strong().color(WIN_HIGHLIGHT));
        });
    }

    /// Render game over card
    fn render_game_over_card(&mut self, ui: &mut egui::Ui, outcome: &GameOutcome) {
        let human = self.session.game.human_color();
        let headline = match outcome.winner() {
            Some(winner) if winner == human => "YOU WIN!",
            Some(_) => "THE MONKEY WINS",
            None => "DRAW",
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    if let Some(winner) = outcome.winner() {
                        ui.label(
                            RichText::new(format!("{} made {} in a row", color_title(winner), self.session.game.rules().win_length))
                                .size(11.0)
                                .color(TEXT_SECONDARY),
                        );
                    }

                    ui.add_space(12.0);

                    Frame::new()
                        .fill(egui::Color32::from_rgb(60, 100, 70))
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            if action_label(ui, "New Game") {
                                self.new_game();
                            }
                        });
                });
            });
    }

    /// Render status message card
    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let game = &self.session.game;
            let overlay = BoardOverlay {
                to_play: game.human_color(),
                last_move: game.last_move(),
                suggested_move: self.session.suggested_move,
                winning_line: game.winning_line(),
                locked: !game.is_human_turn() || self.session.is_ai_thinking(),
            };

            let clicked = self.board_view.show(ui, game.board(), &overlay);

            if let Some(pos) = clicked {
                if let Err(msg) = self.session.try_place_stone(pos) {
                    self.session.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (debug, hint, undo, new_game) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::D),
                i.key_pressed(egui::Key::H),
                i.key_pressed(egui::Key::U),
                i.key_pressed(egui::Key::N),
            )
        });

        if debug {
            self.show_debug = !self.show_debug;
        }
        if hint {
            self.session.request_suggestion();
        }
        if undo {
            self.session.undo();
        }
        if new_game {
            self.new_game();
        }
    }
}

fn action_label(ui: &mut egui::Ui, text: &str) -> bool {
    ui.add(egui::Label::new(RichText::new(text).size(12.0).color(TEXT_PRIMARY)).sense(egui::Sense::click()))
        .clicked()
}

fn color_title(stone: Stone) -> &'static str {
    match stone {
        Stone::Black => "Black",
        Stone::White => "White",
        Stone::Empty => "-",
    }
}

fn difficulty_title(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "Easy",
        Difficulty::Normal => "Normal",
        Difficulty::Hard => "Hard",
    }
}

fn search_type_title(search_type: SearchType) -> &'static str {
    match search_type {
        SearchType::Opening => "Opening",
        SearchType::ImmediateWin => "Winning move",
        SearchType::Block => "Block",
        SearchType::Shortlist => "Shortlist pick",
        SearchType::Heuristic => "Best heuristic",
        SearchType::Lookahead => "Two-ply lookahead",
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.session.check_ai_result();

        if self.session.game.is_monkey_turn() && !self.session.is_ai_thinking() {
            self.session.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.session.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
