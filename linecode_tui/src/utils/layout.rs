use ratatui::layout::{Constraint, Layout, Rect};

pub fn get_popup_area_centered(rect: Rect, width: u16, height: u16) -> Rect {
    let height = height.min(rect.height);
    let width = width.min(rect.width);
    let top_margin = (rect.height - height) / 2;
    let left_margin = (rect.width - width) / 2;
    let rows = Layout::vertical(vec![
        Constraint::Length(top_margin),
        Constraint::Length(height),
        Constraint::Min(0),
    ])
    .split(rect);
    let columns = Layout::horizontal(vec![
        Constraint::Length(left_margin),
        Constraint::Length(width),
        Constraint::Min(0),
    ])
    .split(rows[1]);
    columns[1]
}

#[cfg(test)]
mod test {
    use ratatui::layout::Rect;

    use super::get_popup_area_centered;

    #[test]
    fn test_centered() {
        let area = get_popup_area_centered(Rect::new(0, 0, 80, 24), 40, 6);
        assert_eq!(area, Rect::new(20, 9, 40, 6));
    }

    #[test]
    fn test_clamped_to_parent() {
        let area = get_popup_area_centered(Rect::new(2, 1, 30, 5), 40, 6);
        assert_eq!(area, Rect::new(2, 1, 30, 5));
    }
}
