//! Terminal rendering of page view models.

use std::fmt::{self, Write as _};

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use industrialerp_core::{BadgeTier, CodedEnum, Labeled};
use industrialerp_infra::CommandReceipt;
use industrialerp_inventory::{InventoryItem, StockLevel};
use industrialerp_reports::CategoryShare;

use crate::navigation::Theme;
use crate::views::{
    DashboardView, EMPTY_STATE, InventoryView, ModuleView, Page, PurchasesView, ReportsView,
    SalesView, SidebarEntry, StatCard,
};

/// Colours for one theme.
#[derive(Debug, Clone, Copy)]
struct Palette {
    header: Color,
    accent: Color,
    muted: Color,
    condensed: bool,
}

impl Palette {
    fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                header: Color::Blue,
                accent: Color::DarkBlue,
                muted: Color::DarkGrey,
                condensed: false,
            },
            Theme::Dark => Self {
                header: Color::Cyan,
                accent: Color::White,
                muted: Color::Grey,
                condensed: true,
            },
        }
    }

    fn table(&self) -> Table {
        let mut table = Table::new();
        table
            .load_preset(if self.condensed { UTF8_FULL_CONDENSED } else { UTF8_FULL })
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic);
        table
    }

    fn header_cell(&self, label: &str) -> Cell {
        Cell::new(label)
            .fg(self.header)
            .add_attribute(Attribute::Bold)
    }

    fn title(&self, out: &mut String, title: &str, subtitle: &str) -> fmt::Result {
        writeln!(out)?;
        if subtitle.is_empty() {
            writeln!(out, "{title}")
        } else {
            writeln!(out, "{title} · {subtitle}")
        }
    }
}

fn badge_cell(value: &impl Labeled) -> Cell {
    let badge = value.badge();
    let cell = Cell::new(badge.label);
    match badge.tier {
        BadgeTier::Default => cell.fg(Color::Green),
        BadgeTier::Secondary => cell.fg(Color::Yellow),
        BadgeTier::Destructive => cell.fg(Color::Red).add_attribute(Attribute::Bold),
        BadgeTier::Outline => cell.add_attribute(Attribute::Dim),
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn stock_cell(level: &StockLevel) -> Cell {
    let text = match level.ratio_percent {
        Some(ratio) => format!("{} / {} ({ratio:.0}%)", level.current, level.min),
        None => format!("{} / sin mínimo", level.current),
    };
    Cell::new(text)
}

/// Width of the fill bar, in characters.
const FILL_BAR_WIDTH: usize = 10;

/// `█████░░░░░ 50%` against the maximum, or `sin máximo`.
fn fill_cell(level: &StockLevel) -> Cell {
    let Some(percent) = level.fill_percent() else {
        return Cell::new("sin máximo");
    };
    let filled = ((percent / 100.0 * FILL_BAR_WIDTH as f64).round() as usize).min(FILL_BAR_WIDTH);
    let bar = format!(
        "{}{} {percent:.0}%",
        "█".repeat(filled),
        "░".repeat(FILL_BAR_WIDTH - filled)
    );
    let cell = Cell::new(bar);
    if level.severity.needs_restock() {
        cell.fg(Color::Yellow)
    } else {
        cell
    }
}

/// Render a full page: sidebar, stat cards and the module body.
pub fn render_page(page: &Page) -> Result<String, fmt::Error> {
    let palette = Palette::for_theme(page.navigation.theme);
    let mut out = String::new();

    render_sidebar(&mut out, &palette, &page.sidebar, page.navigation.collapsed)?;
    writeln!(out)?;
    writeln!(out, "{}", cards_table(&palette, &page.view.cards()))?;

    match &page.view {
        ModuleView::Dashboard(view) => render_dashboard(&mut out, &palette, view)?,
        ModuleView::Purchases(view) => render_purchases(&mut out, &palette, view)?,
        ModuleView::Sales(view) => render_sales(&mut out, &palette, view)?,
        ModuleView::Inventory(view) => render_inventory(&mut out, &palette, view)?,
        ModuleView::Reports(view) => render_reports(&mut out, &palette, view)?,
    }
    Ok(out)
}

fn render_sidebar(
    out: &mut String,
    palette: &Palette,
    entries: &[SidebarEntry],
    collapsed: bool,
) -> fmt::Result {
    writeln!(out, "IndustrialERP")?;
    if collapsed {
        let line: Vec<String> = entries
            .iter()
            .map(|e| {
                let initial = e.label.chars().next().unwrap_or('?');
                let mark = if e.active { "*" } else { "" };
                match e.notifications {
                    0 => format!("[{initial}{mark}]"),
                    n => format!("[{initial}{mark} {n}]"),
                }
            })
            .collect();
        return writeln!(out, "{}", line.join(" "));
    }

    let mut table = palette.table();
    table.set_header(vec![palette.header_cell("Módulo"), palette.header_cell("Avisos")]);
    for entry in entries {
        let label = if entry.active {
            Cell::new(format!("▸ {}", entry.label))
                .fg(palette.accent)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new(entry.label)
        };
        let badge = match entry.notifications {
            0 => Cell::new(""),
            n => Cell::new(n).fg(Color::Red),
        };
        table.add_row(vec![label, badge]);
    }
    align_column(&mut table, 1, CellAlignment::Right);
    writeln!(out, "{table}")
}

fn cards_table(palette: &Palette, cards: &[StatCard]) -> Table {
    let mut table = palette.table();
    table.set_header(cards.iter().map(|c| palette.header_cell(c.title)));
    table.add_row(
        cards
            .iter()
            .map(|c| Cell::new(&c.value).add_attribute(Attribute::Bold)),
    );
    table.add_row(cards.iter().map(|c| Cell::new(&c.caption).fg(palette.muted)));
    table
}

fn empty_state(out: &mut String, palette: &Palette) -> fmt::Result {
    let mut table = palette.table();
    table.add_row(vec![Cell::new(EMPTY_STATE).fg(palette.muted)]);
    writeln!(out, "{table}")
}

fn render_dashboard(out: &mut String, palette: &Palette, view: &DashboardView) -> fmt::Result {
    palette.title(out, "Alertas de Stock", "Productos que requieren atención")?;
    let mut table = palette.table();
    table.set_header(vec![
        palette.header_cell("SKU"),
        palette.header_cell("Producto"),
        palette.header_cell("Stock / Mínimo"),
        palette.header_cell("Nivel"),
    ]);
    for row in &view.stock_watch {
        table.add_row(vec![
            Cell::new(&row.sku),
            Cell::new(&row.name),
            stock_cell(&row.level),
            badge_cell(&row.level.severity),
        ]);
    }
    align_column(&mut table, 2, CellAlignment::Right);
    writeln!(out, "{table}")?;

    palette.title(out, "Actividad Reciente", "Últimas transacciones y eventos")?;
    let mut table = palette.table();
    table.set_header(vec![
        palette.header_cell("Fecha"),
        palette.header_cell("Actividad"),
        palette.header_cell("Contraparte"),
        palette.header_cell("Monto"),
    ]);
    for entry in &view.recent_activity {
        table.add_row(vec![
            Cell::new(entry.date),
            Cell::new(&entry.description),
            Cell::new(&entry.party).fg(palette.muted),
            Cell::new(entry.amount),
        ]);
    }
    align_column(&mut table, 3, CellAlignment::Right);
    writeln!(out, "{table}")?;

    palette.title(out, "Ventas vs Compras", "")?;
    let mut table = palette.table();
    table.set_header(vec![
        palette.header_cell("Mes"),
        palette.header_cell("Ventas"),
        palette.header_cell("Compras"),
    ]);
    for month in &view.trend {
        table.add_row(vec![
            Cell::new(&month.month),
            Cell::new(month.sales),
            Cell::new(month.purchases),
        ]);
    }
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    writeln!(out, "{table}")?;

    palette.title(out, "Distribución de Inventario", "")?;
    writeln!(out, "{}", categories_table(palette, &view.categories))
}

fn categories_table(palette: &Palette, categories: &[CategoryShare]) -> Table {
    let mut table = palette.table();
    table.set_header(vec![
        palette.header_cell("Categoría"),
        palette.header_cell("%"),
        palette.header_cell("Monto"),
    ]);
    for share in categories {
        table.add_row(vec![
            Cell::new(&share.category),
            Cell::new(format!("{}%", share.percent)),
            Cell::new(share.amount),
        ]);
    }
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    table
}

fn render_purchases(out: &mut String, palette: &Palette, view: &PurchasesView) -> fmt::Result {
    let caption = listing_caption(view.listing.rows.len(), view.listing.total_records);
    palette.title(out, "Órdenes de Compra", &caption)?;
    if view.listing.is_empty() {
        return empty_state(out, palette);
    }
    let mut table = palette.table();
    table.set_header(vec![
        palette.header_cell("ID"),
        palette.header_cell("Proveedor"),
        palette.header_cell("Fecha"),
        palette.header_cell("Monto"),
        palette.header_cell("Estado"),
        palette.header_cell("Items"),
        palette.header_cell("Entrega"),
    ]);
    for order in &view.listing.rows {
        table.add_row(vec![
            Cell::new(&order.id).add_attribute(Attribute::Bold),
            Cell::new(&order.supplier),
            Cell::new(order.date),
            Cell::new(order.amount),
            badge_cell(&order.status),
            Cell::new(order.item_count),
            Cell::new(order.delivery_date),
        ]);
    }
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    writeln!(out, "{table}")
}

fn render_sales(out: &mut String, palette: &Palette, view: &SalesView) -> fmt::Result {
    let caption = listing_caption(view.listing.rows.len(), view.listing.total_records);
    palette.title(out, "Órdenes de Venta", &caption)?;
    if view.listing.is_empty() {
        return empty_state(out, palette);
    }
    let mut table = palette.table();
    table.set_header(vec![
        palette.header_cell("ID"),
        palette.header_cell("Cliente"),
        palette.header_cell("Fecha"),
        palette.header_cell("Monto"),
        palette.header_cell("Estado"),
        palette.header_cell("Pago"),
        palette.header_cell("Items"),
        palette.header_cell("Vencimiento"),
    ]);
    for order in &view.listing.rows {
        table.add_row(vec![
            Cell::new(&order.id).add_attribute(Attribute::Bold),
            Cell::new(&order.customer),
            Cell::new(order.date),
            Cell::new(order.amount),
            badge_cell(&order.status),
            badge_cell(&order.payment_status),
            Cell::new(order.item_count),
            Cell::new(order.due_date),
        ]);
    }
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 6, CellAlignment::Right);
    writeln!(out, "{table}")
}

fn render_critical_alert(
    out: &mut String,
    palette: &Palette,
    critical: &[InventoryItem],
) -> fmt::Result {
    palette.title(
        out,
        "Alerta de Stock Crítico",
        &format!(
            "{} producto(s) con stock crítico requieren atención inmediata",
            critical.len()
        ),
    )?;
    let mut table = palette.table();
    table.set_header(vec![
        palette.header_cell("Producto"),
        palette.header_cell("Existencias"),
        palette.header_cell("Reorden"),
    ]);
    for item in critical {
        table.add_row(vec![
            Cell::new(&item.name).fg(Color::Red).add_attribute(Attribute::Bold),
            Cell::new(format!(
                "Stock: {} / Mínimo: {}",
                item.current_stock, item.min_stock
            )),
            Cell::new(format!("Reordenar {} uds.", item.reorder_quantity())).fg(Color::Red),
        ]);
    }
    writeln!(out, "{table}")
}

fn render_inventory(out: &mut String, palette: &Palette, view: &InventoryView) -> fmt::Result {
    if !view.critical.is_empty() {
        render_critical_alert(out, palette, &view.critical)?;
    }

    let caption = listing_caption(view.listing.rows.len(), view.listing.total_records);
    palette.title(out, "Inventario", &caption)?;
    if view.listing.is_empty() {
        return empty_state(out, palette);
    }
    let mut table = palette.table();
    table.set_header(vec![
        palette.header_cell("SKU"),
        palette.header_cell("Producto"),
        palette.header_cell("Categoría"),
        palette.header_cell("Stock / Mínimo"),
        palette.header_cell("Llenado"),
        palette.header_cell("Nivel"),
        palette.header_cell("Ubicación"),
        palette.header_cell("Precio"),
        palette.header_cell("Valor"),
        palette.header_cell("Último mov."),
    ]);
    for item in &view.listing.rows {
        let level = item.stock_level();
        table.add_row(vec![
            Cell::new(&item.sku).add_attribute(Attribute::Bold),
            Cell::new(&item.name),
            Cell::new(item.category.code()),
            stock_cell(&level),
            fill_cell(&level),
            badge_cell(&level.severity),
            Cell::new(&item.location),
            Cell::new(item.unit_price),
            Cell::new(item.total_value),
            Cell::new(item.last_movement),
        ]);
    }
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 7, CellAlignment::Right);
    align_column(&mut table, 8, CellAlignment::Right);
    writeln!(out, "{table}")
}

fn render_reports(out: &mut String, palette: &Palette, view: &ReportsView) -> fmt::Result {
    palette.title(out, "Tendencias Financieras", view.range.label())?;
    let mut table = palette.table();
    table.set_header(vec![
        palette.header_cell("Mes"),
        palette.header_cell("Ventas"),
        palette.header_cell("Compras"),
        palette.header_cell("Ganancia"),
        palette.header_cell("Inventario"),
    ]);
    for month in &view.trend {
        table.add_row(vec![
            Cell::new(&month.month),
            Cell::new(month.sales),
            Cell::new(month.purchases),
            Cell::new(month.profit),
            Cell::new(month.inventory),
        ]);
    }
    for column in 1..=4 {
        align_column(&mut table, column, CellAlignment::Right);
    }
    writeln!(out, "{table}")?;

    palette.title(out, "Ventas por Categoría", "")?;
    writeln!(out, "{}", categories_table(palette, &view.categories))?;

    palette.title(out, "Principales Clientes", "")?;
    let mut table = palette.table();
    table.set_header(vec![
        palette.header_cell("Cliente"),
        palette.header_cell("Ventas"),
        palette.header_cell("Crecimiento"),
    ]);
    for customer in &view.top_customers {
        let growth = Cell::new(format!("{:+.1}%", customer.growth_percent));
        let growth = if customer.is_growing() {
            growth.fg(Color::Green)
        } else {
            growth.fg(Color::Red)
        };
        table.add_row(vec![Cell::new(&customer.name), Cell::new(customer.sales), growth]);
    }
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    writeln!(out, "{table}")?;

    palette.title(out, "Productos Más Vendidos", "")?;
    let mut table = palette.table();
    table.set_header(vec![
        palette.header_cell("Producto"),
        palette.header_cell("Vendidos"),
        palette.header_cell("Ingresos"),
        palette.header_cell("Precio Prom."),
    ]);
    for product in &view.top_products {
        let average = product
            .average_price()
            .map_or_else(|| "n/d".to_string(), |price| price.to_string());
        table.add_row(vec![
            Cell::new(&product.name),
            Cell::new(product.units_sold),
            Cell::new(product.revenue),
            Cell::new(average).fg(palette.muted),
        ]);
    }
    for column in 1..=3 {
        align_column(&mut table, column, CellAlignment::Right);
    }
    writeln!(out, "{table}")?;

    palette.title(
        out,
        "Reportes Disponibles",
        &format!("{} de {} listos", view.ready_reports, view.catalog.len()),
    )?;
    let mut table = palette.table();
    table.set_header(vec![
        palette.header_cell("Reporte"),
        palette.header_cell("Descripción"),
        palette.header_cell("Generado"),
        palette.header_cell("Estado"),
    ]);
    for entry in &view.catalog {
        table.add_row(vec![
            Cell::new(&entry.title),
            Cell::new(&entry.description).fg(palette.muted),
            Cell::new(entry.last_generated),
            badge_cell(&entry.status),
        ]);
    }
    writeln!(out, "{table}")
}

fn listing_caption(visible: usize, total: usize) -> String {
    format!("{visible} de {total} registros")
}

/// Module list for `industrialerp modules`.
pub fn render_modules(entries: &[SidebarEntry]) -> String {
    let palette = Palette::for_theme(Theme::Light);
    let mut table = palette.table();
    table.set_header(vec![
        palette.header_cell("Código"),
        palette.header_cell("Módulo"),
        palette.header_cell("Avisos"),
    ]);
    for entry in entries {
        table.add_row(vec![
            Cell::new(entry.module.code()),
            Cell::new(entry.label),
            Cell::new(entry.notifications),
        ]);
    }
    align_column(&mut table, 2, CellAlignment::Right);
    table.to_string()
}

/// Confirmation printed after an accepted create command.
pub fn render_receipt(receipt: &CommandReceipt) -> String {
    let palette = Palette::for_theme(Theme::Light);
    let mut table = palette.table();
    table.set_header(vec![palette.header_cell("Campo"), palette.header_cell("Valor")]);
    table.add_row(vec![Cell::new("id"), Cell::new(receipt.id)]);
    table.add_row(vec![Cell::new("comando"), Cell::new(receipt.kind)]);
    for (label, value) in &receipt.details {
        table.add_row(vec![Cell::new(label), Cell::new(value)]);
    }
    table.add_row(vec![
        Cell::new("aceptado"),
        Cell::new(receipt.accepted_at.format("%Y-%m-%d %H:%M:%S UTC")),
    ]);
    format!("{}\n{table}\n", receipt.message)
}
