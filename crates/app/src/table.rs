//! Plain-text rendering of the prepared product table.

use storefront_catalog::EnrichedProduct;

const HEADER: [&str; 4] = ["ID", "Product", "Category", "User"];
const NO_MATCH_MESSAGE: &str = "No products matching selected criteria";

/// Render the prepared rows as an aligned text table.
///
/// An empty sequence renders the no-results message instead of headers.
pub fn render(products: &[EnrichedProduct]) -> String {
    if products.is_empty() {
        return format!("{NO_MATCH_MESSAGE}\n");
    }

    let rows: Vec<[String; 4]> = products
        .iter()
        .map(|p| {
            [
                p.id.to_string(),
                p.name.clone(),
                format!("{} - {}", p.category.icon, p.category.title),
                p.user.name.clone(),
            ]
        })
        .collect();

    let mut widths = HEADER.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADER.map(String::from), &widths);
    push_separator(&mut out, &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        out.push_str(cell);
        let pad = width - cell.chars().count();
        out.extend(std::iter::repeat(' ').take(pad));
    }
    while out.ends_with(' ') {
        out.pop();
    }
    out.push('\n');
}

fn push_separator(out: &mut String, widths: &[usize; 4]) {
    let total: usize = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
    out.extend(std::iter::repeat('-').take(total));
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_catalog::{Category, Sex, User};
    use storefront_core::{CategoryId, ProductId, UserId};

    fn rows() -> Vec<EnrichedProduct> {
        vec![EnrichedProduct {
            id: ProductId::new(1),
            name: "Apple".to_string(),
            category: Category {
                id: CategoryId::new(3),
                title: "Fruits".to_string(),
                icon: "🍏".to_string(),
                owner_id: UserId::new(2),
            },
            user: User {
                id: UserId::new(2),
                name: "Anna".to_string(),
                sex: Sex::Female,
            },
        }]
    }

    #[test]
    fn empty_input_renders_the_no_match_message() {
        assert_eq!(render(&[]), format!("{NO_MATCH_MESSAGE}\n"));
    }

    #[test]
    fn header_names_the_four_columns() {
        let rendered = render(&rows());
        let header = rendered.lines().next().unwrap();
        for title in HEADER {
            assert!(header.contains(title));
        }
    }

    #[test]
    fn category_cell_joins_icon_and_title() {
        let rendered = render(&rows());
        assert!(rendered.contains("🍏 - Fruits"));
    }

    #[test]
    fn each_product_gets_a_line() {
        let rendered = render(&rows());
        // header + separator + one row
        assert_eq!(rendered.lines().count(), 3);
        assert!(rendered.lines().last().unwrap().contains("Anna"));
    }
}
