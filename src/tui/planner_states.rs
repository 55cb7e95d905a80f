use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::{PlannerContext, PlannerState};

fn page_layout(frame: &Frame) -> std::rc::Rc<[ratatui::layout::Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)])
        .split(frame.area())
}

/// Page 1: pick the recipes to shop for and set how many servings to cook.
pub(crate) struct RecipePicker {
    cursor: usize,
}

impl RecipePicker {
    pub fn new() -> Self {
        Self { cursor: 0 }
    }
}

impl PlannerState for RecipePicker {
    fn render(&self, context: &PlannerContext, frame: &mut Frame) {
        let chunks = page_layout(frame);

        let recipe_lines: Vec<Line> = if context.recipes.is_empty() {
            vec![Line::from("お気に入りレシピがありません")]
        } else {
            context
                .recipes
                .iter()
                .enumerate()
                .map(|(index, recipe)| {
                    let marker = if context.selection.contains(&recipe.id) {
                        "[x]"
                    } else {
                        "[ ]"
                    };
                    let row_style = if index == self.cursor {
                        Style::default().add_modifier(Modifier::REVERSED)
                    } else {
                        Style::default()
                    };

                    let mut spans = vec![Span::styled(
                        format!(
                            "{} {}  {} / {} / 推定予算 {} / {}",
                            marker,
                            recipe.title,
                            recipe.servings,
                            recipe.cooking_time,
                            recipe.estimated_budget,
                            recipe.estimated_calories,
                        ),
                        row_style,
                    )];

                    if let Some(servings) = context.selection.servings_of(&recipe.id) {
                        spans.push(Span::styled(
                            format!("  {servings}人分で作る"),
                            row_style.add_modifier(Modifier::ITALIC),
                        ));
                    }

                    Line::from(spans)
                })
                .collect()
        };

        let recipe_list = Paragraph::new(recipe_lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title("買い物リスト 1/3 - レシピを選択する"),
        );
        frame.render_widget(recipe_list, chunks[0]);

        let help = Paragraph::new("↑/↓ 移動  Enter 選択/解除  +/- 人数  Tab 次のページ  Esc 終了")
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[1]);
    }

    fn handle_key(
        &mut self,
        key: KeyCode,
        context: &mut PlannerContext,
    ) -> Option<Box<dyn PlannerState>> {
        match key {
            KeyCode::Up => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            KeyCode::Down => {
                if self.cursor + 1 < context.recipes.len() {
                    self.cursor += 1;
                }
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(recipe) = context.recipes.get(self.cursor) {
                    let recipe = recipe.clone();
                    context.selection.toggle(&recipe);
                    context.refresh();
                }
                None
            }
            KeyCode::Char('+') => {
                if let Some(recipe) = context.recipes.get(self.cursor) {
                    let id = recipe.id.clone();
                    context.selection.increment_servings(&id);
                    context.refresh();
                }
                None
            }
            KeyCode::Char('-') => {
                if let Some(recipe) = context.recipes.get(self.cursor) {
                    let id = recipe.id.clone();
                    context.selection.decrement_servings(&id);
                    context.refresh();
                }
                None
            }
            KeyCode::Tab => Some(Box::new(PantryCheck::new())),
            _ => None,
        }
    }
}

/// Page 2: tick off the ingredients already in the fridge.
pub(crate) struct PantryCheck {
    cursor: usize,
}

impl PantryCheck {
    pub fn new() -> Self {
        Self { cursor: 0 }
    }
}

impl PlannerState for PantryCheck {
    fn render(&self, context: &PlannerContext, frame: &mut Frame) {
        let chunks = page_layout(frame);

        let item_lines: Vec<Line> = if context.list.is_empty() {
            vec![Line::from("レシピを選択してください")]
        } else {
            context
                .list
                .items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    let marker = if context.checked.contains(&item.id) {
                        "[x]"
                    } else {
                        "[ ]"
                    };
                    let row_style = if index == self.cursor {
                        Style::default().add_modifier(Modifier::REVERSED)
                    } else {
                        Style::default()
                    };

                    Line::from(Span::styled(
                        format!("{} {}  {}", marker, item.name, item.quantity),
                        row_style,
                    ))
                })
                .collect()
        };

        let item_list = Paragraph::new(item_lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title("買い物リスト 2/3 - 冷蔵庫にある食材を選択"),
        );
        frame.render_widget(item_list, chunks[0]);

        let help = Paragraph::new("↑/↓ 移動  Enter チェック  Tab 次のページ  Esc 終了")
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[1]);
    }

    fn handle_key(
        &mut self,
        key: KeyCode,
        context: &mut PlannerContext,
    ) -> Option<Box<dyn PlannerState>> {
        match key {
            KeyCode::Up => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            KeyCode::Down => {
                if self.cursor + 1 < context.list.items.len() {
                    self.cursor += 1;
                }
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(item) = context.list.items.get(self.cursor) {
                    let id = item.id.clone();
                    context.toggle_checked(&id);
                }
                None
            }
            KeyCode::Tab => Some(Box::new(TodayList)),
            _ => None,
        }
    }
}

/// Page 3: what is left to buy today, with the summed estimates.
pub(crate) struct TodayList;

impl PlannerState for TodayList {
    fn render(&self, context: &PlannerContext, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),    // Remaining items
                Constraint::Length(4), // Totals
                Constraint::Length(3), // Help
            ])
            .split(frame.area());

        let remaining = context.remaining();
        let item_lines: Vec<Line> = if remaining.is_empty() {
            vec![Line::from("買い物リストは空です")]
        } else {
            remaining
                .iter()
                .map(|item| Line::from(format!("・{}  {}", item.name, item.quantity)))
                .collect()
        };

        let item_list = Paragraph::new(item_lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title("買い物リスト 3/3 - 今日の買い物リスト"),
        );
        frame.render_widget(item_list, chunks[0]);

        let totals = Paragraph::new(vec![
            Line::from(format!("推定予算: ¥{}-", context.list.total_budget)),
            Line::from(format!("推定カロリー: {}kcal", context.list.total_calories)),
        ])
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(totals, chunks[1]);

        let help = Paragraph::new("Tab レシピ選択にもどる  Esc 終了")
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);
    }

    fn handle_key(
        &mut self,
        key: KeyCode,
        _context: &mut PlannerContext,
    ) -> Option<Box<dyn PlannerState>> {
        match key {
            KeyCode::Tab => Some(Box::new(RecipePicker::new())),
            _ => None,
        }
    }
}
