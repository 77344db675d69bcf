//! テキスト描画
//!
//! Screen / DayMenu をターミナル向けの文字列にする。

use mess_menu_common::{DayMenu, Location, Meal, Screen};
use std::fmt::Write;

pub const TITLE: &str = "IIIT-H Mess Menu";

/// 画面全体を描画
pub fn render_screen(screen: &Screen) -> String {
    match screen {
        Screen::Loading => "Loading menu data...\n".to_string(),
        Screen::Failed { message } => format!("Error: {}\n", message),
        Screen::Ready {
            clock,
            day,
            location,
            cards,
        } => {
            let mut out = String::new();
            let _ = writeln!(out, "{}  {}", TITLE, clock);
            let mess = location.map(|l| l.title()).unwrap_or("-");
            let _ = writeln!(out, "Day: {}  Mess: {}", day, mess);

            if location.is_none() {
                let names: Vec<&str> = Location::ALL.iter().map(|l| l.as_str()).collect();
                let _ = writeln!(out, "\nSelect Mess: {}", names.join(", "));
                return out;
            }

            for card in cards {
                let _ = writeln!(out, "\n[{}] {}", card.tag(), card.title());
                for item in &card.items {
                    let _ = writeln!(out, "  - {}", item);
                }
            }
            out
        }
    }
}

/// パース結果（全曜日）を描画
pub fn render_day_menu(menu: &DayMenu) -> String {
    let mut out = String::new();
    for meal in Meal::ALL {
        let _ = writeln!(out, "[{}]", meal.title());
        let mut any = false;
        for (day, items) in menu.days(meal) {
            any = true;
            let _ = writeln!(out, "  {:<9}  {}", day.title(), items.join(", "));
        }
        if !any {
            let _ = writeln!(out, "  (no items)");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use mess_menu_common::{Day, MealCard, MENU_NOT_AVAILABLE};

    #[test]
    fn test_render_loading() {
        assert_eq!(render_screen(&Screen::Loading), "Loading menu data...\n");
    }

    #[test]
    fn test_render_failed() {
        let screen = Screen::Failed {
            message: "boom".into(),
        };
        assert_eq!(render_screen(&screen), "Error: boom\n");
    }

    #[test]
    fn test_render_ready_without_location() {
        let screen = Screen::Ready {
            clock: "08:15".into(),
            day: Day::Monday,
            location: None,
            cards: vec![],
        };
        let text = render_screen(&screen);
        assert!(text.contains("08:15"));
        assert!(text.contains("Select Mess: yuktahaar, kadamba, north, south"));
    }

    #[test]
    fn test_render_ready_cards() {
        let screen = Screen::Ready {
            clock: "13:00".into(),
            day: Day::Monday,
            location: Some(Location::North),
            cards: vec![
                MealCard {
                    meal: Meal::Lunch,
                    items: vec![MENU_NOT_AVAILABLE.into()],
                },
            ],
        };
        let text = render_screen(&screen);
        assert!(text.contains("Day: Monday  Mess: North"));
        assert!(text.contains("[LUNCH] Lunch"));
        assert!(text.contains("  - Menu not available"));
    }

    #[test]
    fn test_render_day_menu() {
        let mut menu = DayMenu::new();
        menu.push_item(Meal::Snacks, Day::Friday, "Samosa".into());
        menu.push_item(Meal::Snacks, Day::Friday, "Tea".into());

        let text = render_day_menu(&menu);
        assert!(text.contains("Friday     Samosa, Tea"));
        assert!(text.contains("[Breakfast]\n  (no items)"));
    }
}
