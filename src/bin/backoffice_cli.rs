use anyhow::{Context, Result};
use backoffice_dashboard::{
    config::{self, AppConfig},
    fixtures::MockDataSource,
    i18n::{Locale, Preferences},
    models::{OrderStatus, ProductStatus},
    services::{
        dashboard::DashboardOverview,
        orders::{OrderQuery, OrderRow},
        products::{ProductQuery, ProductRow},
        Backoffice,
    },
    table::{
        OrderFilter, OrderSortField, PageLink, PageRequest, PageWindow, ProductFilter,
        ProductSortField, Sort, StatusFilter, StockLevel, TableView,
    },
};
use chrono::Utc;
use clap::{ArgAction, Args, Parser, Subcommand};
use serde::Serialize;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load_config().context("failed to load configuration")?;
    config::init_tracing(config.log_level(), config.log_json);

    let backoffice = Backoffice::from_config(&MockDataSource, &config);

    match cli.command {
        Commands::Products(args) => handle_products(&backoffice, &config, args, cli.json)?,
        Commands::Orders(args) => handle_orders(&backoffice, &config, args, cli.json)?,
        Commands::Summary(args) => handle_summary(&backoffice, &config, args, cli.json)?,
    }

    Ok(())
}

#[derive(Parser)]
#[command(
    name = "backoffice",
    about = "Browse the back-office product and order tables",
    version
)]
struct Cli {
    #[arg(
        long,
        global = true,
        action = ArgAction::SetTrue,
        help = "Render command output as pretty JSON"
    )]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the product table
    Products(ProductsArgs),
    /// List the order table
    Orders(OrdersArgs),
    /// Show the dashboard overview
    Summary(DisplayArgs),
}

#[derive(Args)]
struct DisplayArgs {
    #[arg(long, help = "Locale tag for labels and currency (en, de); defaults to config")]
    locale: Option<String>,
}

#[derive(Args)]
struct PageArgs {
    #[arg(
        long,
        default_value_t = 1,
        allow_negative_numbers = true,
        help = "Page number (1-indexed, out-of-range values are clamped)"
    )]
    page: i64,
    #[arg(long, help = "Rows per page; defaults to config")]
    page_size: Option<usize>,
    #[arg(long, action = ArgAction::SetTrue, help = "Sort descending")]
    desc: bool,
}

#[derive(Args)]
struct ProductsArgs {
    #[arg(long, default_value = "all", help = "Filter by status: all, active, inactive")]
    status: StatusFilter<ProductStatus>,
    #[arg(long, default_value = "all", help = "Filter by stock level: all, low, out")]
    stock: StockLevel,
    #[arg(long, help = "Case-insensitive match on name or SKU")]
    search: Option<String>,
    #[arg(
        long,
        help = "Sort by: name, sku, category, price, inventory, last_updated"
    )]
    sort: Option<ProductSortField>,
    #[command(flatten)]
    page: PageArgs,
    #[command(flatten)]
    display: DisplayArgs,
}

#[derive(Args)]
struct OrdersArgs {
    #[arg(
        long,
        default_value = "all",
        help = "Filter by status: all, pending, processing, shipped, delivered, cancelled"
    )]
    status: StatusFilter<OrderStatus>,
    #[arg(long, help = "Case-insensitive match on order number, customer name or email")]
    search: Option<String>,
    #[arg(long, help = "Sort by: order_number, customer, total, items, date")]
    sort: Option<OrderSortField>,
    #[command(flatten)]
    page: PageArgs,
    #[command(flatten)]
    display: DisplayArgs,
}

fn preferences(config: &AppConfig, display: &DisplayArgs) -> Preferences {
    let mut prefs = config.preferences();
    if let Some(tag) = display.locale.as_deref() {
        prefs.set_locale(Locale::from_tag(tag));
    }
    prefs
}

fn page_request(config: &AppConfig, args: &PageArgs) -> PageRequest {
    PageRequest::new(args.page, args.page_size.unwrap_or(config.page_size))
}

fn sort<F>(field: Option<F>, desc: bool) -> Option<Sort<F>> {
    field.map(|field| if desc { Sort::desc(field) } else { Sort::asc(field) })
}

fn handle_products(
    backoffice: &Backoffice,
    config: &AppConfig,
    args: ProductsArgs,
    json: bool,
) -> Result<()> {
    let prefs = preferences(config, &args.display);
    let query = ProductQuery {
        filter: ProductFilter::default()
            .with_status(args.status)
            .with_stock(args.stock)
            .with_search(args.search.unwrap_or_default()),
        sort: sort(args.sort, args.page.desc),
        page: page_request(config, &args.page),
    };

    let view = backoffice.products.view(&query, &prefs, Utc::now());

    if json {
        print_json(&view)?;
    } else {
        println!("{}", prefs.t("products"));
        for row in &view.rows {
            render_product(row);
        }
        render_footer(&view, &prefs);
    }

    Ok(())
}

fn handle_orders(
    backoffice: &Backoffice,
    config: &AppConfig,
    args: OrdersArgs,
    json: bool,
) -> Result<()> {
    let prefs = preferences(config, &args.display);
    let query = OrderQuery {
        filter: OrderFilter::default()
            .with_status(args.status)
            .with_search(args.search.unwrap_or_default()),
        sort: sort(args.sort, args.page.desc),
        page: page_request(config, &args.page),
    };

    let view = backoffice.orders.view(&query, &prefs, Utc::now());

    if json {
        print_json(&view)?;
    } else {
        println!("{}", prefs.t("orders"));
        for row in &view.rows {
            render_order(row);
        }
        render_footer(&view, &prefs);
    }

    Ok(())
}

fn handle_summary(
    backoffice: &Backoffice,
    config: &AppConfig,
    args: DisplayArgs,
    json: bool,
) -> Result<()> {
    let prefs = preferences(config, &args);
    let overview = DashboardOverview::render(backoffice, &prefs, Utc::now());

    if json {
        print_json(&overview)?;
        return Ok(());
    }

    println!("{}", prefs.t("dashboard"));
    for stat in &overview.stats {
        println!("- {}: {}", stat.label, stat.value);
    }

    println!("{}", prefs.t("dailySales"));
    for point in &overview.daily_sales {
        println!("  • {} {}", point.date, point.amount);
    }

    println!("{}", prefs.t("recentOrders"));
    for row in &overview.recent_orders {
        render_order(row);
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn render_product(row: &ProductRow) {
    let warning = if row.low_stock_warning { " (!)" } else { "" };
    println!(
        "- {} • {} • {} • {} • stock {}{} • {} • {}",
        row.sku,
        row.name,
        row.category,
        row.price,
        row.inventory,
        warning,
        row.status_label,
        row.last_updated
    );
}

fn render_order(row: &OrderRow) {
    let tracking = row
        .tracking_id
        .as_deref()
        .map(|id| format!(" • tracking {}", id))
        .unwrap_or_default();
    println!(
        "- {} • {} <{}> • {} • {} item(s) • {} • {}{}",
        row.order_number,
        row.customer_name,
        row.customer_email,
        row.total,
        row.items,
        row.status_label,
        row.date,
        tracking
    );
}

fn render_footer<Row>(view: &TableView<Row>, prefs: &Preferences) {
    if let Some(message) = &view.empty_message {
        println!("{}", message);
    }
    println!(
        "{} {} {} {}  {}",
        prefs.t("page"),
        view.pagination.page,
        prefs.t("of"),
        view.pagination.total_pages,
        render_window(&view.window, prefs)
    );
}

fn render_window(window: &PageWindow, prefs: &Preferences) -> String {
    let mut parts = Vec::with_capacity(window.links.len() + 2);
    if window.has_previous {
        parts.push(format!("< {}", prefs.t("previous")));
    }
    for link in &window.links {
        parts.push(match link {
            PageLink::Page {
                number,
                active: true,
            } => format!("[{}]", number),
            PageLink::Page { number, .. } => number.to_string(),
            PageLink::Ellipsis => "…".to_string(),
        });
    }
    if window.has_next {
        parts.push(format!("{} >", prefs.t("next")));
    }
    parts.join(" ")
}
