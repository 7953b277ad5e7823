//! Application state and event handling
//!
//! One `App` owns the session, the API client and all per-screen state. Every
//! mutation round-trips through the service and is followed by a refetch of
//! the affected screen, so the terminal never shows optimistic state.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio_util::sync::CancellationToken;
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;
use tui_logger::TuiWidgetState;

use pos_client::{ApiClient, ClientError, FeedEvent, FeedHandle, KitchenFeed, SessionStore};
use shared::models::{
    Bill, Branch, BranchCreate, DailyReport, DiningTable, MenuCategory, MenuCategoryCreate,
    MenuItem, MenuItemCreate, Order, PaymentMethod, Restaurant, RestaurantCreate, RestaurantUpdate,
    Staff, StaffCreate, StaffRole, TableCreate, TableQr,
};
use shared::{Destination, StaffProfile, default_destination, permitted_destinations};

use crate::board::{BoardCursor, board_columns};
use crate::form::{Form, FormField};
use crate::settings::Settings;

/// Active screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Destination(Destination),
}

#[derive(Default)]
pub struct LoginState {
    pub phone: Input,
    pub password: Input,
    /// false = phone focused, true = password
    pub focus_password: bool,
}

#[derive(Default)]
pub struct OrdersState {
    pub orders: Vec<Order>,
    pub cursor: BoardCursor,
}

pub struct PayForm {
    pub bill_id: String,
    pub method: PaymentMethod,
    pub amount: Input,
    pub reference: Input,
    /// 0 = method, 1 = amount, 2 = reference
    pub focus: usize,
}

#[derive(Default)]
pub struct BillingState {
    /// Tables that currently have open bills, with those bills
    pub open: Vec<(DiningTable, Vec<Bill>)>,
    pub selected: usize,
    pub pay: Option<PayForm>,
}

impl BillingState {
    /// Flattened (table, bill) pairs in display order.
    pub fn rows(&self) -> Vec<(&DiningTable, &Bill)> {
        self.open
            .iter()
            .flat_map(|(t, bills)| bills.iter().map(move |b| (t, b)))
            .collect()
    }
}

#[derive(Default)]
pub struct MenuState {
    pub categories: Vec<MenuCategory>,
    pub items: Vec<MenuItem>,
    pub selected: usize,
    pub form: Option<Form>,
    /// Which form is open: item or category
    pub adding_category: bool,
}

#[derive(Default)]
pub struct TablesState {
    pub tables: Vec<DiningTable>,
    pub selected: usize,
    pub form: Option<Form>,
    pub last_qr: Option<TableQr>,
}

#[derive(Default)]
pub struct StaffState {
    pub staff: Vec<Staff>,
    pub selected: usize,
    pub form: Option<Form>,
}

pub struct ReportState {
    pub date: Input,
    pub report: Option<DailyReport>,
}

impl Default for ReportState {
    fn default() -> Self {
        Self {
            date: Input::new(chrono::Local::now().format("%Y-%m-%d").to_string()),
            report: None,
        }
    }
}

#[derive(Default)]
pub struct BranchesState {
    pub branches: Vec<Branch>,
    pub selected: usize,
    pub form: Option<Form>,
}

#[derive(Default)]
pub struct SystemState {
    pub restaurants: Vec<Restaurant>,
    pub selected: usize,
    pub form: Option<Form>,
    /// Reset-password dialog targets the selected restaurant
    pub resetting: bool,
}

pub struct App {
    pub settings: Settings,
    pub api: ApiClient,
    pub session: SessionStore,
    pub screen: Screen,
    pub profile: Option<StaffProfile>,
    pub branch_id: Option<String>,
    pub nav: Vec<Destination>,
    /// One-line status / error message shown in the footer
    pub status: Option<String>,
    pub should_quit: bool,
    pub logger_state: TuiWidgetState,

    pub login: LoginState,
    pub orders: OrdersState,
    pub billing: BillingState,
    pub menu: MenuState,
    pub tables: TablesState,
    pub staff: StaffState,
    pub report: ReportState,
    pub branches: BranchesState,
    pub system: SystemState,

    pub feed: Option<FeedHandle>,
    feed_cancel: CancellationToken,
}

impl App {
    pub async fn new(settings: Settings) -> anyhow::Result<Self> {
        let api = ApiClient::new(settings.client_config())?;
        let session = SessionStore::load(&settings.data_dir)?;

        let mut app = Self {
            settings,
            api,
            session,
            screen: Screen::Login,
            profile: None,
            branch_id: None,
            nav: Vec::new(),
            status: None,
            should_quit: false,
            logger_state: TuiWidgetState::new(),
            login: LoginState::default(),
            orders: OrdersState::default(),
            billing: BillingState::default(),
            menu: MenuState::default(),
            tables: TablesState::default(),
            staff: StaffState::default(),
            report: ReportState::default(),
            branches: BranchesState::default(),
            system: SystemState::default(),
            feed: None,
            feed_cancel: CancellationToken::new(),
        };

        // Restore a persisted session, if one exists.
        if let (Some(token), Some(profile)) = (
            app.session.token().map(str::to_string),
            app.session.staff(),
        ) {
            app.api.set_token(Some(token));
            app.enter_session(profile).await;
        }
        Ok(app)
    }

    /// Set up navigation and land on the role's default screen.
    async fn enter_session(&mut self, profile: StaffProfile) {
        let role = profile.role;
        self.nav = permitted_destinations(role).to_vec();
        self.profile = Some(profile);
        self.branch_id = self.resolve_branch().await;
        let dest = default_destination(role);
        self.switch_to(dest).await;
    }

    /// Branch the screens operate on: the profile's pinned branch, then the
    /// persisted selection, then the restaurant's first branch (persisted).
    async fn resolve_branch(&mut self) -> Option<String> {
        if let Some(profile) = &self.profile {
            if let Some(b) = &profile.branch_id {
                return Some(b.clone());
            }
            if profile.role == StaffRole::SystemAdmin {
                return None;
            }
        }
        if let Some(b) = self.session.selected_branch() {
            return Some(b.to_string());
        }
        let restaurant_id = self.session.restaurant_id()?;
        match self.api.list_branches(&restaurant_id).await {
            Ok(branches) => {
                let first = branches.first()?.id.clone();
                if let Err(e) = self.session.set_selected_branch(&first) {
                    tracing::warn!("Failed to persist branch selection: {e}");
                }
                Some(first)
            }
            Err(e) => {
                tracing::warn!("Branch resolution failed: {e}");
                None
            }
        }
    }

    pub async fn switch_to(&mut self, dest: Destination) {
        if !self.nav.contains(&dest) {
            return;
        }
        self.stop_feed();
        self.status = None;
        self.screen = Screen::Destination(dest);
        self.load_screen(dest).await;
        if dest == Destination::Orders {
            self.start_feed().await;
        }
    }

    async fn load_screen(&mut self, dest: Destination) {
        match dest {
            Destination::Orders => self.refetch_orders().await,
            Destination::Billing => self.refetch_billing().await,
            Destination::Menu => self.refetch_menu().await,
            Destination::Tables => self.refetch_tables().await,
            Destination::Staff => self.refetch_staff().await,
            Destination::Report => {} // fetched on demand
            Destination::Branches => self.refetch_branches().await,
            Destination::System => self.refetch_restaurants().await,
        }
    }

    // ---- feed ----

    async fn start_feed(&mut self) {
        let Some(branch) = self.branch_id.clone() else {
            return;
        };
        self.feed_cancel = CancellationToken::new();
        let handle = KitchenFeed::spawn(
            self.api.config(),
            &branch,
            self.feed_cancel.clone(),
        )
        .await;
        self.feed = Some(handle);
    }

    fn stop_feed(&mut self) {
        self.feed_cancel.cancel();
        self.feed = None;
    }

    /// A feed event only ever means one thing: refetch the board.
    pub async fn on_feed_event(&mut self, event: Option<FeedEvent>) {
        match event {
            Some(FeedEvent::Invalidated) => self.refetch_orders().await,
            None => self.feed = None,
        }
    }

    // ---- error plumbing ----

    /// Record an error; a 401 additionally ends the session.
    fn note_error(&mut self, e: ClientError) {
        if e.is_unauthorized() {
            tracing::info!("Session rejected by the service, logging out");
            self.logout();
            self.status = Some("Session expired, please sign in again".to_string());
        } else {
            tracing::warn!("Request failed: {e}");
            self.status = Some(e.to_string());
        }
    }

    pub fn logout(&mut self) {
        self.stop_feed();
        if let Err(e) = self.session.clear() {
            tracing::warn!("Failed to clear session: {e}");
        }
        self.api.set_token(None);
        self.profile = None;
        self.branch_id = None;
        self.nav.clear();
        self.login = LoginState::default();
        self.orders = OrdersState::default();
        self.billing = BillingState::default();
        self.menu = MenuState::default();
        self.tables = TablesState::default();
        self.staff = StaffState::default();
        self.report = ReportState::default();
        self.branches = BranchesState::default();
        self.system = SystemState::default();
        self.screen = Screen::Login;
        self.status = None;
    }

    // ---- refetchers ----

    pub async fn refetch_orders(&mut self) {
        let Some(branch) = self.branch_id.clone() else {
            return;
        };
        match self.api.list_orders(&branch).await {
            Ok(orders) => {
                self.orders.orders = orders;
                let columns = board_columns(&self.orders.orders);
                self.orders.cursor.clamp(&columns);
            }
            Err(e) => self.note_error(e),
        }
    }

    async fn refetch_billing(&mut self) {
        let Some(branch) = self.branch_id.clone() else {
            return;
        };
        match self.api.unpaid_bills(&branch).await {
            Ok(open) => {
                self.billing.open = open;
                let rows = self.billing.rows().len();
                if rows == 0 {
                    self.billing.selected = 0;
                } else if self.billing.selected >= rows {
                    self.billing.selected = rows - 1;
                }
            }
            Err(e) => self.note_error(e),
        }
    }

    async fn refetch_menu(&mut self) {
        let Some(branch) = self.branch_id.clone() else {
            return;
        };
        match self.api.list_categories(&branch).await {
            Ok(categories) => self.menu.categories = categories,
            Err(e) => {
                self.note_error(e);
                return;
            }
        }
        match self.api.list_items(&branch, None).await {
            Ok(items) => {
                self.menu.items = items;
                if !self.menu.items.is_empty() && self.menu.selected >= self.menu.items.len() {
                    self.menu.selected = self.menu.items.len() - 1;
                }
            }
            Err(e) => self.note_error(e),
        }
    }

    async fn refetch_tables(&mut self) {
        let Some(branch) = self.branch_id.clone() else {
            return;
        };
        match self.api.list_tables(&branch).await {
            Ok(tables) => {
                self.tables.tables = tables;
                if !self.tables.tables.is_empty()
                    && self.tables.selected >= self.tables.tables.len()
                {
                    self.tables.selected = self.tables.tables.len() - 1;
                }
            }
            Err(e) => self.note_error(e),
        }
    }

    async fn refetch_staff(&mut self) {
        let Some(restaurant_id) = self.session.restaurant_id() else {
            self.status = Some("No restaurant in session".to_string());
            return;
        };
        match self.api.list_staff(&restaurant_id).await {
            Ok(staff) => {
                self.staff.staff = staff;
                if !self.staff.staff.is_empty() && self.staff.selected >= self.staff.staff.len() {
                    self.staff.selected = self.staff.staff.len() - 1;
                }
            }
            Err(e) => self.note_error(e),
        }
    }

    async fn refetch_branches(&mut self) {
        let Some(restaurant_id) = self.session.restaurant_id() else {
            self.status = Some("No restaurant in session".to_string());
            return;
        };
        match self.api.list_branches(&restaurant_id).await {
            Ok(branches) => {
                self.branches.branches = branches;
                if !self.branches.branches.is_empty()
                    && self.branches.selected >= self.branches.branches.len()
                {
                    self.branches.selected = self.branches.branches.len() - 1;
                }
            }
            Err(e) => self.note_error(e),
        }
    }

    async fn refetch_restaurants(&mut self) {
        match self.api.list_restaurants().await {
            Ok(restaurants) => {
                self.system.restaurants = restaurants;
                if !self.system.restaurants.is_empty()
                    && self.system.selected >= self.system.restaurants.len()
                {
                    self.system.selected = self.system.restaurants.len() - 1;
                }
            }
            Err(e) => self.note_error(e),
        }
    }

    // ---- event handling ----

    pub async fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else { return };
        if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
            return;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Login => self.handle_login_key(key).await,
            Screen::Destination(dest) => {
                if self.handle_global_key(key, dest).await {
                    return;
                }
                match dest {
                    Destination::Orders => self.handle_orders_key(key).await,
                    Destination::Billing => self.handle_billing_key(key).await,
                    Destination::Menu => self.handle_menu_key(key).await,
                    Destination::Tables => self.handle_tables_key(key).await,
                    Destination::Staff => self.handle_staff_key(key).await,
                    Destination::Report => self.handle_report_key(key).await,
                    Destination::Branches => self.handle_branches_key(key).await,
                    Destination::System => self.handle_system_key(key).await,
                }
            }
        }
    }

    fn form_open(&self, dest: Destination) -> bool {
        match dest {
            Destination::Billing => self.billing.pay.is_some(),
            Destination::Menu => self.menu.form.is_some(),
            Destination::Tables => self.tables.form.is_some(),
            Destination::Staff => self.staff.form.is_some(),
            // The date field only ever needs digits and '-', so global keys
            // stay live on the report screen.
            Destination::Report => false,
            Destination::Branches => self.branches.form.is_some(),
            Destination::System => self.system.form.is_some(),
            Destination::Orders => false,
        }
    }

    /// Keys valid on every screen while no form captures input.
    /// Returns true when the key was consumed.
    async fn handle_global_key(&mut self, key: KeyEvent, dest: Destination) -> bool {
        if self.form_open(dest) {
            return false;
        }
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                true
            }
            KeyCode::Char('l') => {
                self.logout();
                true
            }
            KeyCode::Char('r') => {
                self.load_screen(dest).await;
                true
            }
            KeyCode::Tab | KeyCode::BackTab => {
                if let Some(pos) = self.nav.iter().position(|&d| d == dest) {
                    let next = if key.code == KeyCode::Tab {
                        (pos + 1) % self.nav.len()
                    } else {
                        (pos + self.nav.len() - 1) % self.nav.len()
                    };
                    let target = self.nav[next];
                    self.switch_to(target).await;
                }
                true
            }
            _ => false,
        }
    }

    // ---- login ----

    async fn handle_login_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.login.focus_password = !self.login.focus_password;
            }
            KeyCode::Enter => {
                let phone = self.login.phone.value().trim().to_string();
                let password = self.login.password.value().to_string();
                if phone.is_empty() || password.is_empty() {
                    self.status = Some("Enter phone and password".to_string());
                    return;
                }
                match self.api.login(&phone, &password).await {
                    Ok(profile) => {
                        if let Err(e) = self.session.set_login(&profile) {
                            tracing::warn!("Failed to persist session: {e}");
                        }
                        self.status = None;
                        self.enter_session(profile).await;
                    }
                    Err(e) => {
                        tracing::warn!("Login failed: {e}");
                        // Generic line; never echo which part was wrong.
                        self.status = Some("Login failed".to_string());
                        self.login.password = Input::default();
                    }
                }
            }
            _ => {
                let field = if self.login.focus_password {
                    &mut self.login.password
                } else {
                    &mut self.login.phone
                };
                field.handle_event(&Event::Key(key));
            }
        }
    }

    // ---- orders ----

    async fn handle_orders_key(&mut self, key: KeyEvent) {
        let columns = board_columns(&self.orders.orders);
        match key.code {
            KeyCode::Left => self.orders.cursor.left(),
            KeyCode::Right => self.orders.cursor.right(),
            KeyCode::Up => self.orders.cursor.up(),
            KeyCode::Down => self.orders.cursor.down(&columns),
            KeyCode::Enter => {
                let Some(idx) = self.orders.cursor.selected(&columns) else {
                    return;
                };
                let order = self.orders.orders[idx].clone();
                if order.status.is_terminal() {
                    return;
                }
                match self.api.advance_order(&order).await {
                    Ok(_) => self.refetch_orders().await,
                    Err(e) => self.note_error(e),
                }
            }
            _ => {}
        }
        let columns = board_columns(&self.orders.orders);
        self.orders.cursor.clamp(&columns);
    }

    // ---- billing ----

    async fn handle_billing_key(&mut self, key: KeyEvent) {
        if self.billing.pay.is_some() {
            self.handle_pay_form_key(key).await;
            return;
        }
        let rows = self.billing.rows().len();
        match key.code {
            KeyCode::Up => self.billing.selected = self.billing.selected.saturating_sub(1),
            KeyCode::Down => {
                if self.billing.selected + 1 < rows {
                    self.billing.selected += 1;
                }
            }
            KeyCode::Enter => {
                let Some((_, bill)) = self.billing.rows().get(self.billing.selected).copied()
                else {
                    return;
                };
                self.billing.pay = Some(PayForm {
                    bill_id: bill.id.clone(),
                    method: PaymentMethod::Cash,
                    amount: Input::new(format!("{:.2}", bill.total)),
                    reference: Input::default(),
                    focus: 0,
                });
            }
            _ => {}
        }
    }

    async fn handle_pay_form_key(&mut self, key: KeyEvent) {
        let Some(form) = &mut self.billing.pay else {
            return;
        };
        match key.code {
            KeyCode::Esc => self.billing.pay = None,
            KeyCode::Tab | KeyCode::Down => form.focus = (form.focus + 1) % 3,
            KeyCode::BackTab | KeyCode::Up => form.focus = (form.focus + 2) % 3,
            KeyCode::Left | KeyCode::Right if form.focus == 0 => {
                form.method = match form.method {
                    PaymentMethod::Cash => PaymentMethod::Upi,
                    PaymentMethod::Upi => PaymentMethod::Card,
                    PaymentMethod::Card => PaymentMethod::Cash,
                };
            }
            KeyCode::Enter => {
                let Ok(amount) = form.amount.value().trim().parse::<f64>() else {
                    self.status = Some("Invalid amount".to_string());
                    return;
                };
                let reference = form.reference.value().trim();
                if form.method.needs_reference() && reference.is_empty() {
                    self.status = Some("Reference required for this method".to_string());
                    return;
                }
                let bill_id = form.bill_id.clone();
                let method = form.method;
                let reference = (!reference.is_empty()).then(|| reference.to_string());
                match self.api.pay_bill(&bill_id, method, amount, reference).await {
                    Ok(receipt) => {
                        self.status = Some(format!(
                            "Paid {} ({:.2})",
                            receipt.bill_number, receipt.amount_paid
                        ));
                        self.billing.pay = None;
                        self.refetch_billing().await;
                    }
                    Err(e) => self.note_error(e),
                }
            }
            _ => {
                let input = match form.focus {
                    1 => &mut form.amount,
                    2 => &mut form.reference,
                    _ => return,
                };
                input.handle_event(&Event::Key(key));
            }
        }
    }

    // ---- menu ----

    async fn handle_menu_key(&mut self, key: KeyEvent) {
        if self.menu.form.is_some() {
            self.handle_menu_form_key(key).await;
            return;
        }
        match key.code {
            KeyCode::Up => self.menu.selected = self.menu.selected.saturating_sub(1),
            KeyCode::Down => {
                if self.menu.selected + 1 < self.menu.items.len() {
                    self.menu.selected += 1;
                }
            }
            KeyCode::Char(' ') => {
                let Some(item) = self.menu.items.get(self.menu.selected) else {
                    return;
                };
                let id = item.id.clone();
                let available = !item.is_available;
                match self.api.set_item_availability(&id, available).await {
                    Ok(_) => self.refetch_menu().await,
                    Err(e) => self.note_error(e),
                }
            }
            KeyCode::Char('n') => {
                self.menu.adding_category = false;
                self.menu.form = Some(Form::new(
                    "New Item",
                    vec![
                        FormField::new("Category"),
                        FormField::new("Name"),
                        FormField::new("Description"),
                        FormField::new("Price"),
                        FormField::new("GST %"),
                        FormField::new("Veg (y/n)"),
                    ],
                ));
            }
            KeyCode::Char('c') => {
                self.menu.adding_category = true;
                self.menu.form = Some(Form::new(
                    "New Category",
                    vec![FormField::new("Name"), FormField::new("Sort order")],
                ));
            }
            _ => {}
        }
    }

    async fn handle_menu_form_key(&mut self, key: KeyEvent) {
        let Some(form) = &mut self.menu.form else {
            return;
        };
        if form.handle_key(key) {
            return;
        }
        if key.code == KeyCode::Esc {
            self.menu.form = None;
            return;
        }
        // Enter: submit
        let Some(branch) = self.branch_id.clone() else {
            return;
        };
        let form = match self.menu.form.take() {
            Some(f) => f,
            None => return,
        };
        if self.menu.adding_category {
            let sort_order = form.value(1).parse().unwrap_or(0);
            let payload = MenuCategoryCreate {
                branch_id: branch,
                name: form.value(0).to_string(),
                sort_order,
            };
            if payload.name.is_empty() {
                self.status = Some("Name is required".to_string());
                self.menu.form = Some(form);
                return;
            }
            match self.api.create_category(&payload).await {
                Ok(_) => self.refetch_menu().await,
                Err(e) => self.note_error(e),
            }
        } else {
            let category_ref = form.value(0);
            let category_id = self
                .menu
                .categories
                .iter()
                .find(|c| c.name.eq_ignore_ascii_case(category_ref) || c.id == category_ref)
                .map(|c| c.id.clone());
            let Some(category_id) = category_id else {
                self.status = Some(format!("Unknown category: {category_ref}"));
                self.menu.form = Some(form);
                return;
            };
            let Ok(base_price) = form.value(3).parse::<f64>() else {
                self.status = Some("Invalid price".to_string());
                self.menu.form = Some(form);
                return;
            };
            let payload = MenuItemCreate {
                branch_id: branch,
                category_id,
                name: form.value(1).to_string(),
                description: form.optional(2),
                base_price,
                gst_percent: form.value(4).parse().unwrap_or(5),
                is_veg: form.value(5).eq_ignore_ascii_case("y"),
            };
            if payload.name.is_empty() {
                self.status = Some("Name is required".to_string());
                self.menu.form = Some(form);
                return;
            }
            match self.api.create_item(&payload).await {
                Ok(_) => self.refetch_menu().await,
                Err(e) => self.note_error(e),
            }
        }
    }

    // ---- tables ----

    async fn handle_tables_key(&mut self, key: KeyEvent) {
        if let Some(form) = &mut self.tables.form {
            if form.handle_key(key) {
                return;
            }
            if key.code == KeyCode::Esc {
                self.tables.form = None;
                return;
            }
            let Some(branch) = self.branch_id.clone() else {
                return;
            };
            let form = match self.tables.form.take() {
                Some(f) => f,
                None => return,
            };
            let Ok(table_number) = form.value(0).parse::<i32>() else {
                self.status = Some("Invalid table number".to_string());
                self.tables.form = Some(form);
                return;
            };
            let payload = TableCreate {
                branch_id: branch,
                table_number,
            };
            match self.api.create_table(&payload).await {
                Ok(_) => self.refetch_tables().await,
                Err(e) => self.note_error(e),
            }
            return;
        }
        match key.code {
            KeyCode::Up => self.tables.selected = self.tables.selected.saturating_sub(1),
            KeyCode::Down => {
                if self.tables.selected + 1 < self.tables.tables.len() {
                    self.tables.selected += 1;
                }
            }
            KeyCode::Char('n') => {
                self.tables.form = Some(Form::new(
                    "New Table",
                    vec![FormField::new("Table number")],
                ));
            }
            KeyCode::Char('g') => {
                let Some(table) = self.tables.tables.get(self.tables.selected) else {
                    return;
                };
                let id = table.id.clone();
                match self.api.generate_table_qr(&id).await {
                    Ok(qr) => {
                        self.status = Some(format!("QR minted for table {}", qr.table_number));
                        self.tables.last_qr = Some(qr);
                    }
                    Err(e) => self.note_error(e),
                }
            }
            _ => {}
        }
    }

    // ---- staff ----

    async fn handle_staff_key(&mut self, key: KeyEvent) {
        if let Some(form) = &mut self.staff.form {
            if form.handle_key(key) {
                return;
            }
            if key.code == KeyCode::Esc {
                self.staff.form = None;
                return;
            }
            let Some(restaurant_id) = self.session.restaurant_id() else {
                return;
            };
            let form = match self.staff.form.take() {
                Some(f) => f,
                None => return,
            };
            let role = match parse_role(form.value(2)) {
                Some(r) => r,
                None => {
                    self.status =
                        Some("Role must be KITCHEN, CASHIER, BRANCH_ADMIN or SUPER_ADMIN".into());
                    self.staff.form = Some(form);
                    return;
                }
            };
            let branch_id = form.optional(3).or_else(|| self.branch_id.clone());
            let payload = StaffCreate {
                restaurant_id,
                branch_id,
                role,
                name: form.value(0).to_string(),
                phone: form.value(1).to_string(),
                password: form.value(4).to_string(),
            };
            if payload.name.is_empty() || payload.phone.is_empty() || payload.password.is_empty() {
                self.status = Some("Name, phone and password are required".to_string());
                self.staff.form = Some(form);
                return;
            }
            match self.api.create_staff(&payload).await {
                Ok(_) => self.refetch_staff().await,
                Err(e) => self.note_error(e),
            }
            return;
        }
        match key.code {
            KeyCode::Up => self.staff.selected = self.staff.selected.saturating_sub(1),
            KeyCode::Down => {
                if self.staff.selected + 1 < self.staff.staff.len() {
                    self.staff.selected += 1;
                }
            }
            KeyCode::Char('n') => {
                self.staff.form = Some(Form::new(
                    "New Staff",
                    vec![
                        FormField::new("Name"),
                        FormField::new("Phone"),
                        FormField::new("Role"),
                        FormField::new("Branch ID (blank = current)"),
                        FormField::masked("Password"),
                    ],
                ));
            }
            KeyCode::Char('d') => {
                let Some(member) = self.staff.staff.get(self.staff.selected) else {
                    return;
                };
                let id = member.id.clone();
                match self.api.deactivate_staff(&id).await {
                    Ok(()) => self.refetch_staff().await,
                    Err(e) => self.note_error(e),
                }
            }
            _ => {}
        }
    }

    // ---- report ----

    async fn handle_report_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                let Some(branch) = self.branch_id.clone() else {
                    return;
                };
                let date = self.report.date.value().trim().to_string();
                if chrono::NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_err() {
                    self.status = Some("Date must be YYYY-MM-DD".to_string());
                    return;
                }
                match self.api.daily_report(&branch, &date).await {
                    Ok(report) => {
                        self.status = None;
                        self.report.report = Some(report);
                    }
                    Err(e) => self.note_error(e),
                }
            }
            _ => {
                self.report.date.handle_event(&Event::Key(key));
            }
        }
    }

    // ---- branches ----

    async fn handle_branches_key(&mut self, key: KeyEvent) {
        if let Some(form) = &mut self.branches.form {
            if form.handle_key(key) {
                return;
            }
            if key.code == KeyCode::Esc {
                self.branches.form = None;
                return;
            }
            let form = match self.branches.form.take() {
                Some(f) => f,
                None => return,
            };
            let payload = BranchCreate {
                name: form.value(0).to_string(),
                address: form.value(1).to_string(),
                city: form.value(2).to_string(),
                state: form.value(3).to_string(),
                pincode: form.value(4).to_string(),
                gstin: form.optional(5),
            };
            if payload.name.is_empty() {
                self.status = Some("Name is required".to_string());
                self.branches.form = Some(form);
                return;
            }
            match self.api.create_branch(&payload).await {
                Ok(_) => self.refetch_branches().await,
                Err(e) => self.note_error(e),
            }
            return;
        }
        match key.code {
            KeyCode::Up => self.branches.selected = self.branches.selected.saturating_sub(1),
            KeyCode::Down => {
                if self.branches.selected + 1 < self.branches.branches.len() {
                    self.branches.selected += 1;
                }
            }
            KeyCode::Enter => {
                // Work on this branch from now on.
                let Some(branch) = self.branches.branches.get(self.branches.selected) else {
                    return;
                };
                let id = branch.id.clone();
                let name = branch.name.clone();
                if let Err(e) = self.session.set_selected_branch(&id) {
                    tracing::warn!("Failed to persist branch selection: {e}");
                }
                self.branch_id = Some(id);
                self.status = Some(format!("Now operating branch: {name}"));
            }
            KeyCode::Char('n') => {
                self.branches.form = Some(Form::new(
                    "New Branch",
                    vec![
                        FormField::new("Name"),
                        FormField::new("Address"),
                        FormField::new("City"),
                        FormField::new("State"),
                        FormField::new("Pincode"),
                        FormField::new("GSTIN (optional)"),
                    ],
                ));
            }
            _ => {}
        }
    }

    // ---- provider dashboard ----

    async fn handle_system_key(&mut self, key: KeyEvent) {
        if let Some(form) = &mut self.system.form {
            if form.handle_key(key) {
                return;
            }
            if key.code == KeyCode::Esc {
                self.system.form = None;
                self.system.resetting = false;
                return;
            }
            let form = match self.system.form.take() {
                Some(f) => f,
                None => return,
            };
            if self.system.resetting {
                self.system.resetting = false;
                let Some(restaurant) = self.system.restaurants.get(self.system.selected) else {
                    return;
                };
                let id = restaurant.id.clone();
                let password = form.value(0).to_string();
                if password.is_empty() {
                    self.status = Some("Password is required".to_string());
                    return;
                }
                match self.api.reset_owner_password(&id, &password).await {
                    Ok(()) => self.status = Some("Owner password reset".to_string()),
                    Err(e) => self.note_error(e),
                }
            } else {
                let payload = RestaurantCreate {
                    name: form.value(0).to_string(),
                    whatsapp_phone_number_id: form.value(1).to_string(),
                    whatsapp_display_number: form.value(2).to_string(),
                    max_branches: form.value(3).parse().unwrap_or(1),
                    owner_name: form.value(4).to_string(),
                    owner_phone: form.value(5).to_string(),
                    owner_password: form.value(6).to_string(),
                };
                if payload.name.is_empty() || payload.owner_phone.is_empty() {
                    self.status = Some("Name and owner phone are required".to_string());
                    self.system.form = Some(form);
                    return;
                }
                match self.api.create_restaurant(&payload).await {
                    Ok(_) => self.refetch_restaurants().await,
                    Err(e) => self.note_error(e),
                }
            }
            return;
        }
        match key.code {
            KeyCode::Up => self.system.selected = self.system.selected.saturating_sub(1),
            KeyCode::Down => {
                if self.system.selected + 1 < self.system.restaurants.len() {
                    self.system.selected += 1;
                }
            }
            KeyCode::Char(' ') => {
                let Some(restaurant) = self.system.restaurants.get(self.system.selected) else {
                    return;
                };
                let id = restaurant.id.clone();
                let update = RestaurantUpdate {
                    is_active: Some(!restaurant.is_active),
                    ..RestaurantUpdate::default()
                };
                match self.api.update_restaurant(&id, &update).await {
                    Ok(_) => self.refetch_restaurants().await,
                    Err(e) => self.note_error(e),
                }
            }
            KeyCode::Char('n') => {
                self.system.resetting = false;
                self.system.form = Some(Form::new(
                    "Onboard Restaurant",
                    vec![
                        FormField::new("Name"),
                        FormField::new("WhatsApp phone number ID"),
                        FormField::new("WhatsApp display number"),
                        FormField::new("Max branches"),
                        FormField::new("Owner name"),
                        FormField::new("Owner phone"),
                        FormField::masked("Owner password"),
                    ],
                ));
            }
            KeyCode::Char('p') => {
                if self.system.restaurants.get(self.system.selected).is_some() {
                    self.system.resetting = true;
                    self.system.form = Some(Form::new(
                        "Reset Owner Password",
                        vec![FormField::masked("New password")],
                    ));
                }
            }
            _ => {}
        }
    }
}

fn parse_role(value: &str) -> Option<StaffRole> {
    let normalized = value.trim().to_ascii_uppercase();
    StaffRole::ASSIGNABLE
        .into_iter()
        .find(|r| r.as_str() == normalized)
}
