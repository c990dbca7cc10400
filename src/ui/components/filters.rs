//! Filter chips: media type and year facets.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FilterBarInfo;

fn chip(label: &str, value: &str, theme: &Theme) {
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{label} ");
    print!("{}", Theme::fg(&theme.colors.chip_fg));
    print!("{}", Theme::bg(&theme.colors.chip_bg));
    print!(" {value} ");
    print!("{}", Theme::reset());
}

/// Renders the facet chips at `row`.
///
/// ```text
///      Type [t]  Movie   Year [y]  1999   [c] clear
/// ```
pub fn render_filter_bar(row: usize, filters: &FilterBarInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", " ".repeat(cols));
    position_cursor(row, 6);

    chip("Type [t]", &filters.type_label, theme);
    print!("   ");

    let year = if filters.editing_year {
        format!("{}▏", filters.year)
    } else if filters.year.is_empty() {
        "Any".to_string()
    } else {
        filters.year.clone()
    };
    chip("Year [y]", &year, theme);

    if filters.active {
        print!("   ");
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("[c] clear");
        print!("{}", Theme::reset());
    }

    row + 1
}
