use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutTier {
    Wide,   // ≥80 cols: quote banner, full word card, tall note panel
    Narrow, // <80 cols: word card and note panel only
}

impl LayoutTier {
    pub fn from_area(area: Rect) -> Self {
        if area.width >= 80 {
            LayoutTier::Wide
        } else {
            LayoutTier::Narrow
        }
    }

    pub fn show_quote(&self, height: u16) -> bool {
        height >= 22 && *self == LayoutTier::Wide
    }

    pub fn note_height(&self, height: u16) -> u16 {
        if height >= 26 { 9 } else { 6 }
    }
}

pub struct AppLayout {
    pub header: Rect,
    pub quote: Option<Rect>,
    pub word: Rect,
    pub note: Rect,
    pub footer: Rect,
    pub tier: LayoutTier,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let tier = LayoutTier::from_area(area);
        let show_quote = tier.show_quote(area.height);
        let note_height = tier.note_height(area.height);

        let mut constraints: Vec<Constraint> = vec![Constraint::Length(1)];
        if show_quote {
            constraints.push(Constraint::Length(4));
        }
        constraints.push(Constraint::Min(8));
        constraints.push(Constraint::Length(note_height));
        constraints.push(Constraint::Length(1));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        let mut idx = 0;
        let header = chunks[idx];
        idx += 1;
        let quote = if show_quote {
            let rect = chunks[idx];
            idx += 1;
            Some(rect)
        } else {
            None
        };
        let word = chunks[idx];
        let note = chunks[idx + 1];
        let footer = chunks[idx + 2];

        Self {
            header,
            quote,
            word,
            note,
            footer,
            tier,
        }
    }
}
