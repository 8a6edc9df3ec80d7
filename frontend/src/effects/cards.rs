/// Pointer state of an interactive card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardPointer {
    /// Never touched; no inline style yet.
    #[default]
    Untouched,
    Hovered,
    Pressed,
    Left,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEvent {
    Enter,
    Leave,
    Down,
    Up,
}

impl CardPointer {
    pub fn on(self, event: PointerEvent) -> Self {
        match event {
            PointerEvent::Enter => CardPointer::Hovered,
            PointerEvent::Leave => CardPointer::Left,
            PointerEvent::Down => CardPointer::Pressed,
            PointerEvent::Up => CardPointer::Hovered,
        }
    }

    pub fn style(self) -> &'static str {
        match self {
            CardPointer::Untouched => "",
            CardPointer::Hovered => {
                "transform: translateY(-8px) scale(1.02); box-shadow: 0 15px 40px rgba(0, 0, 0, 0.15); transition: all 0.3s cubic-bezier(0.4, 0, 0.2, 1);"
            }
            CardPointer::Pressed => {
                "transform: translateY(-6px) scale(1.01); box-shadow: 0 15px 40px rgba(0, 0, 0, 0.15); transition: all 0.3s cubic-bezier(0.4, 0, 0.2, 1);"
            }
            CardPointer::Left => {
                "transform: translateY(0) scale(1); box-shadow: 0 10px 30px rgba(0, 0, 0, 0.1); transition: all 0.3s cubic-bezier(0.4, 0, 0.2, 1);"
            }
        }
    }
}
