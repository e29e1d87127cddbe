use crate::ui::theme;

/// The six characters needed to draw a rounded (or ASCII) frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderSet {
    pub top_left: &'static str,
    pub top_right: &'static str,
    pub bottom_left: &'static str,
    pub bottom_right: &'static str,
    pub horizontal: &'static str,
    pub vertical: &'static str,
}

impl BorderSet {
    pub fn new(supports_unicode: bool) -> Self {
        if supports_unicode {
            Self {
                top_left: theme::borders::TOP_LEFT,
                top_right: theme::borders::TOP_RIGHT,
                bottom_left: theme::borders::BOTTOM_LEFT,
                bottom_right: theme::borders::BOTTOM_RIGHT,
                horizontal: theme::borders::HORIZONTAL,
                vertical: theme::borders::VERTICAL,
            }
        } else {
            Self {
                top_left: theme::borders_ascii::TOP_LEFT,
                top_right: theme::borders_ascii::TOP_RIGHT,
                bottom_left: theme::borders_ascii::BOTTOM_LEFT,
                bottom_right: theme::borders_ascii::BOTTOM_RIGHT,
                horizontal: theme::borders_ascii::HORIZONTAL,
                vertical: theme::borders_ascii::VERTICAL,
            }
        }
    }

    /// `width` horizontal characters between the two given corners.
    pub fn rule(&self, left: &str, right: &str, width: usize) -> String {
        format!("{}{}{}", left, self.horizontal.repeat(width), right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_rule() {
        let set = BorderSet::new(false);
        assert_eq!(set.rule(set.top_left, set.top_right, 3), "+---+");
    }

    #[test]
    fn unicode_corners_are_rounded() {
        assert_eq!(BorderSet::new(true).top_left, "╭");
    }
}
