//! Command line definition.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use industrialerp_core::Money;
use industrialerp_infra::CreateCommand;
use industrialerp_inventory::{InventoryCategory, InventoryItemDraft, Sku};
use industrialerp_observability::LogFormat;
use industrialerp_purchasing::{Priority, PurchaseOrderDraft};
use industrialerp_reports::DateRange;
use industrialerp_sales::{PaymentTerms, SalesOrderDraft};

use crate::config::{DATA_ENV, LOG_FORMAT_ENV};
use crate::navigation::{ModuleId, NavAction, NavigationState};
use crate::views::ViewQuery;

#[derive(Debug, Parser)]
#[command(
    name = "industrialerp",
    version,
    about = "IndustrialERP console: purchases, sales, inventory and reports",
    long_about = "Terminal dashboard over an in-memory ERP dataset.\n\n\
                  Pages are derived from the dataset on every run; create\n\
                  commands are validated but never persisted."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Dataset file to load instead of the embedded sample.
    #[arg(long, value_name = "PATH", env = DATA_ENV, global = true)]
    pub data: Option<PathBuf>,

    /// Log output format.
    #[arg(
        long = "log-format",
        value_enum,
        env = LOG_FORMAT_ENV,
        default_value = "compact",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// More log output (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log warnings and errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Date delivery dates are checked against (defaults to the current UTC date).
    #[arg(long, value_name = "DATE", global = true, hide = true)]
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render one module page.
    Show(ShowArgs),

    /// List the modules with their notification counts.
    Modules,

    /// Validate a create command against the dataset.
    #[command(subcommand)]
    Create(CreateArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// dashboard, purchases, sales, inventory or reports.
    #[arg(value_name = "MODULE", default_value = "dashboard")]
    pub module: ModuleId,

    /// Case-insensitive text matched against the id and name columns.
    #[arg(long, default_value = "")]
    pub search: String,

    /// Status or category code, or "all".
    #[arg(long, value_name = "CODE")]
    pub filter: Option<String>,

    /// Reporting period: last7days, last30days, last3months, last6months, lastyear.
    #[arg(long)]
    pub range: Option<DateRange>,

    /// Collapse the side panel.
    #[arg(long)]
    pub collapsed: bool,

    /// Use the dark theme.
    #[arg(long)]
    pub dark: bool,

    /// Print the page model as JSON instead of tables.
    #[arg(long)]
    pub json: bool,
}

impl ShowArgs {
    /// Navigation state reached from the default state by these flags.
    pub fn navigation(&self) -> NavigationState {
        let mut actions = vec![
            NavAction::Select(self.module),
            NavAction::SetCollapsed(self.collapsed),
        ];
        if self.dark {
            actions.push(NavAction::ToggleTheme);
        }
        NavigationState::default().apply_all(actions)
    }

    pub fn query(&self) -> ViewQuery {
        ViewQuery {
            search: self.search.clone(),
            filter: self.filter.clone(),
            range: self.range,
        }
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum CreateArgs {
    /// New purchase order.
    Purchase(PurchaseArgs),
    /// New sales order.
    Sale(SaleArgs),
    /// New inventory item.
    Item(ItemArgs),
}

#[derive(Debug, Clone, Args)]
pub struct PurchaseArgs {
    #[arg(long)]
    pub supplier: String,

    /// YYYY-MM-DD, not before today.
    #[arg(long = "delivery-date", value_name = "DATE")]
    pub delivery_date: NaiveDate,

    #[arg(long, default_value = "")]
    pub description: String,

    /// low, medium, high or urgent.
    #[arg(long, default_value = "medium")]
    pub priority: Priority,

    #[arg(long, value_name = "AMOUNT", value_parser = parse_money)]
    pub budget: Money,
}

#[derive(Debug, Clone, Args)]
pub struct SaleArgs {
    #[arg(long)]
    pub customer: String,

    /// YYYY-MM-DD, not before today.
    #[arg(long = "delivery-date", value_name = "DATE")]
    pub delivery_date: NaiveDate,

    #[arg(long, default_value = "")]
    pub description: String,

    #[arg(long)]
    pub quantity: u32,

    #[arg(long = "unit-price", value_name = "AMOUNT", value_parser = parse_money)]
    pub unit_price: Money,

    /// Whole percent.
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub discount: u8,

    /// immediate, net15, net30 or net60.
    #[arg(long, default_value = "net30")]
    pub terms: PaymentTerms,

    /// Sales rep id or name.
    #[arg(long)]
    pub rep: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct ItemArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub sku: Sku,

    /// Category name, e.g. "Materia Prima".
    #[arg(long)]
    pub category: InventoryCategory,

    #[arg(long)]
    pub location: String,

    #[arg(long, default_value = "")]
    pub description: String,

    #[arg(long, default_value_t = 0)]
    pub stock: u32,

    #[arg(long, default_value_t = 0)]
    pub min: u32,

    #[arg(long, default_value_t = 0)]
    pub max: u32,

    #[arg(long = "unit-price", value_name = "AMOUNT", value_parser = parse_money)]
    pub unit_price: Money,
}

impl CreateArgs {
    pub fn to_command(&self) -> CreateCommand {
        match self {
            CreateArgs::Purchase(a) => CreateCommand::PurchaseOrder(PurchaseOrderDraft {
                supplier: a.supplier.clone(),
                delivery_date: a.delivery_date,
                description: a.description.clone(),
                priority: a.priority,
                estimated_budget: a.budget,
            }),
            CreateArgs::Sale(a) => CreateCommand::SalesOrder(SalesOrderDraft {
                customer: a.customer.clone(),
                delivery_date: a.delivery_date,
                description: a.description.clone(),
                quantity: a.quantity,
                unit_price: a.unit_price,
                discount_percent: a.discount,
                payment_terms: a.terms,
                sales_rep: a.rep.clone(),
            }),
            CreateArgs::Item(a) => CreateCommand::InventoryItem(InventoryItemDraft {
                name: a.name.clone(),
                sku: a.sku.clone(),
                category: a.category,
                location: a.location.clone(),
                description: a.description.clone(),
                current_stock: a.stock,
                min_stock: a.min,
                max_stock: a.max,
                unit_price: a.unit_price,
            }),
        }
    }
}

fn parse_money(raw: &str) -> Result<Money, String> {
    let amount: Money = raw
        .trim()
        .trim_start_matches('$')
        .replace(',', "")
        .parse()
        .map_err(|_| format!("{raw:?} is not an amount"))?;
    if amount.cents() < 0 {
        return Err(format!("{raw:?} cannot be negative"));
    }
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    use crate::navigation::Theme;

    #[test]
    fn definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn show_flags_drive_navigation() {
        let cli = Cli::try_parse_from([
            "industrialerp",
            "show",
            "reports",
            "--range",
            "last3months",
            "--collapsed",
            "--dark",
        ])
        .unwrap();
        let Command::Show(args) = cli.command else {
            panic!("expected show");
        };
        let nav = args.navigation();
        assert_eq!(nav.active, ModuleId::Reports);
        assert!(nav.collapsed);
        assert_eq!(nav.theme, Theme::Dark);
        assert_eq!(args.query().range, Some(DateRange::Last3Months));
    }

    #[test]
    fn unknown_module_is_a_usage_error() {
        assert!(Cli::try_parse_from(["industrialerp", "show", "payroll"]).is_err());
    }

    #[test]
    fn money_accepts_currency_formatting() {
        assert_eq!(parse_money("$1,250.50").unwrap(), Money::from_cents(125_050));
        assert_eq!(parse_money("1.005").unwrap(), Money::from_cents(101));
        assert!(parse_money("-5").is_err());
        assert!(parse_money("abc").is_err());
    }

    #[test]
    fn sale_args_build_a_draft() {
        let cli = Cli::try_parse_from([
            "industrialerp",
            "create",
            "sale",
            "--customer",
            "Metalúrgica del Sur",
            "--delivery-date",
            "2024-02-01",
            "--quantity",
            "10",
            "--unit-price",
            "85.50",
            "--discount",
            "10",
            "--terms",
            "net15",
        ])
        .unwrap();
        let Command::Create(args) = cli.command else {
            panic!("expected create");
        };
        let CreateCommand::SalesOrder(draft) = args.to_command() else {
            panic!("expected a sales order");
        };
        assert_eq!(draft.line_total(), Money::from_cents(76_950));
        assert_eq!(draft.payment_terms, PaymentTerms::Net15);
    }

    #[test]
    fn discount_above_hundred_is_rejected() {
        let result = Cli::try_parse_from([
            "industrialerp",
            "create",
            "sale",
            "--customer",
            "x",
            "--delivery-date",
            "2024-02-01",
            "--quantity",
            "1",
            "--unit-price",
            "1",
            "--discount",
            "101",
        ]);
        assert!(result.is_err());
    }
}
