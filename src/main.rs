//! Interactive front-desk menu for the gas agency back office.
//!
//! Presentation only: reads choices, calls the core handlers and stores,
//! prints results. All business rules live in the library crate.

use std::io::{self, Write};
use std::sync::Arc;

use gas_agency_crm::adapters::memory::{
    CounterIdIssuer, InMemoryBookingStore, InMemoryComplaintStore, InMemoryCustomerStore,
    InMemoryPaymentStore,
};
use gas_agency_crm::application::handlers::{
    BookCylinderCommand, BookCylinderHandler, FileComplaintCommand, FileComplaintHandler,
    GetDashboardHandler, RecordPaymentCommand, RecordPaymentHandler, RegisterCustomerCommand,
    RegisterCustomerHandler, UpdateCustomerCommand, UpdateCustomerHandler,
};
use gas_agency_crm::config::AppConfig;
use gas_agency_crm::domain::booking::{BookingStatus, Cylinder};
use gas_agency_crm::domain::customer::ConnectionKind;
use gas_agency_crm::domain::foundation::{
    BookingId, ComplaintId, CustomerId, Describable, PaymentId,
};
use gas_agency_crm::domain::payment::PaymentMode;
use gas_agency_crm::ports::{
    BookingStore, ComplaintStore, CustomerPatch, CustomerStore, PaymentStore,
};
use tracing_subscriber::EnvFilter;

struct App {
    customers: Arc<InMemoryCustomerStore>,
    bookings: Arc<InMemoryBookingStore>,
    payments: Arc<InMemoryPaymentStore>,
    complaints: Arc<InMemoryComplaintStore>,
    register_customer: RegisterCustomerHandler,
    update_customer: UpdateCustomerHandler,
    book_cylinder: BookCylinderHandler,
    record_payment: RecordPaymentHandler,
    file_complaint: FileComplaintHandler,
    dashboard: GetDashboardHandler,
}

impl App {
    fn new(config: &AppConfig) -> Self {
        let issuer = Arc::new(CounterIdIssuer::new());
        let customers = Arc::new(InMemoryCustomerStore::new(issuer.clone()));
        let bookings = Arc::new(InMemoryBookingStore::with_lead_days(
            issuer.clone(),
            config.delivery_lead_days,
        ));
        let payments = Arc::new(InMemoryPaymentStore::new(issuer.clone()));
        let complaints = Arc::new(InMemoryComplaintStore::new(issuer));

        Self {
            register_customer: RegisterCustomerHandler::new(customers.clone()),
            update_customer: UpdateCustomerHandler::new(customers.clone()),
            book_cylinder: BookCylinderHandler::new(customers.clone(), bookings.clone()),
            record_payment: RecordPaymentHandler::new(bookings.clone(), payments.clone()),
            file_complaint: FileComplaintHandler::new(customers.clone(), complaints.clone()),
            dashboard: GetDashboardHandler::new(
                customers.clone(),
                bookings.clone(),
                payments.clone(),
                complaints.clone(),
            ),
            customers,
            bookings,
            payments,
            complaints,
        }
    }
}

#[tokio::main]
async fn main() {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Config error ({err}); using defaults");
            AppConfig::default()
        }
    };
    let config = match config.validate() {
        Ok(()) => config,
        Err(err) => {
            eprintln!("Config error ({err}); using defaults");
            AppConfig::default()
        }
    };

    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let app = App::new(&config);

    println!("=== Gas Agency Back Office ===");
    loop {
        println!();
        println!("1. Customers");
        println!("2. Bookings");
        println!("3. Payments");
        println!("4. Complaints");
        println!("5. Reports");
        println!("6. Dashboard");
        println!("0. Exit");
        match read_line("Choice: ").as_str() {
            "1" => customer_menu(&app).await,
            "2" => booking_menu(&app).await,
            "3" => payment_menu(&app).await,
            "4" => complaint_menu(&app).await,
            "5" => reports_menu(&app).await,
            "6" => show_dashboard(&app).await,
            "0" => break,
            _ => println!("Invalid choice."),
        }
    }
    println!("Goodbye.");
}

async fn customer_menu(app: &App) {
    loop {
        println!();
        println!("1. Register customer");
        println!("2. View customer");
        println!("3. List all customers");
        println!("4. Search by name");
        println!("5. Update customer");
        println!("6. Deactivate customer");
        println!("0. Back");
        match read_line("Choice: ").as_str() {
            "1" => {
                let kind = match read_line("Connection (1 Domestic / 2 Commercial): ").as_str() {
                    "2" => ConnectionKind::Commercial,
                    _ => ConnectionKind::Domestic,
                };
                let cmd = RegisterCustomerCommand {
                    name: read_line("Name: "),
                    phone: read_line("Phone: "),
                    email: read_line("Email: "),
                    address: read_line("Address: "),
                    connection_kind: kind,
                };
                match app.register_customer.handle(cmd).await {
                    Ok(customer) => println!("Registered: {}", customer.id),
                    Err(err) => println!("Error: {}", err),
                }
            }
            "2" => {
                let id = CustomerId::new(read_line("Customer ID: "));
                match app.customers.find_by_id(&id).await {
                    Ok(Some(customer)) => println!("{}", customer.describe()),
                    Ok(None) => println!("Customer not found: {}", id),
                    Err(err) => println!("Error: {}", err),
                }
            }
            "3" => match app.customers.list_all().await {
                Ok(customers) => {
                    for customer in customers {
                        println!(
                            "[{}] {} | {} | {}",
                            customer.id,
                            customer.contact.summary(),
                            customer.connection_kind,
                            customer.connection_status
                        );
                    }
                }
                Err(err) => println!("Error: {}", err),
            },
            "4" => {
                let needle = read_line("Name contains: ");
                match app.customers.search_by_name(&needle).await {
                    Ok(hits) if hits.is_empty() => println!("No matches."),
                    Ok(hits) => {
                        for customer in hits {
                            println!("[{}] {}", customer.id, customer.contact.summary());
                        }
                    }
                    Err(err) => println!("Error: {}", err),
                }
            }
            "5" => {
                let id = CustomerId::new(read_line("Customer ID: "));
                let patch = CustomerPatch {
                    name: optional(read_line("New name (blank to keep): ")),
                    phone: optional(read_line("New phone (blank to keep): ")),
                    email: optional(read_line("New email (blank to keep): ")),
                    address: optional(read_line("New address (blank to keep): ")),
                };
                let cmd = UpdateCustomerCommand {
                    customer_id: id,
                    patch,
                };
                match app.update_customer.handle(cmd).await {
                    Ok(customer) => println!("Updated: {}", customer.id),
                    Err(err) => println!("Error: {}", err),
                }
            }
            "6" => {
                let id = CustomerId::new(read_line("Customer ID: "));
                match app.customers.deactivate(&id).await {
                    Ok(customer) => println!("Deactivated: {}", customer.id),
                    Err(err) => println!("Error: {}", err),
                }
            }
            "0" => break,
            _ => println!("Invalid choice."),
        }
    }
}

async fn booking_menu(app: &App) {
    loop {
        println!();
        println!("1. Book a cylinder");
        println!("2. View booking");
        println!("3. List bookings for customer");
        println!("4. Update delivery status");
        println!("5. Cancel booking");
        println!("0. Back");
        match read_line("Choice: ").as_str() {
            "1" => {
                let customer_id = CustomerId::new(read_line("Customer ID: "));
                for (i, cylinder) in Cylinder::CATALOG.iter().enumerate() {
                    println!("{}. {}", i + 1, cylinder);
                }
                let cylinder = match read_line("Cylinder: ").as_str() {
                    "2" => Cylinder::Domestic5Kg,
                    "3" => Cylinder::Commercial19Kg,
                    _ => Cylinder::Domestic14Kg,
                };
                let cmd = BookCylinderCommand {
                    customer_id,
                    cylinder,
                };
                match app.book_cylinder.handle(cmd).await {
                    Ok(booking) => println!(
                        "Booked: {} (expected delivery {})",
                        booking.id,
                        booking.expected_delivery.display_date()
                    ),
                    Err(err) => println!("Error: {}", err),
                }
            }
            "2" => {
                let id = BookingId::new(read_line("Booking ID: "));
                match app.bookings.find_by_id(&id).await {
                    Ok(Some(booking)) => println!("{}", booking.describe()),
                    Ok(None) => println!("Booking not found: {}", id),
                    Err(err) => println!("Error: {}", err),
                }
            }
            "3" => {
                let id = CustomerId::new(read_line("Customer ID: "));
                match app.bookings.list_by_customer(&id).await {
                    Ok(bookings) if bookings.is_empty() => println!("No bookings."),
                    Ok(bookings) => {
                        for booking in bookings {
                            println!(
                                "[{}] {} | {} | {}",
                                booking.id,
                                booking.cylinder.label(),
                                booking.booked_at.display_date(),
                                booking.status
                            );
                        }
                    }
                    Err(err) => println!("Error: {}", err),
                }
            }
            "4" => {
                let id = BookingId::new(read_line("Booking ID: "));
                println!("1. Confirmed  2. Out for Delivery  3. Delivered");
                let target = match read_line("New status: ").as_str() {
                    "1" => BookingStatus::Confirmed,
                    "2" => BookingStatus::OutForDelivery,
                    "3" => BookingStatus::Delivered,
                    _ => {
                        println!("Invalid choice.");
                        continue;
                    }
                };
                match app.bookings.advance_status(&id, target).await {
                    Ok(booking) => println!("Booking {} is now {}", booking.id, booking.status),
                    Err(err) => println!("Error: {}", err),
                }
            }
            "5" => {
                let id = BookingId::new(read_line("Booking ID: "));
                match app.bookings.cancel(&id).await {
                    Ok(booking) => println!("Cancelled: {}", booking.id),
                    Err(err) => println!("Error: {}", err),
                }
            }
            "0" => break,
            _ => println!("Invalid choice."),
        }
    }
}

async fn payment_menu(app: &App) {
    loop {
        println!();
        println!("1. Record payment");
        println!("2. View payment");
        println!("3. List payments for booking");
        println!("4. Refund payment");
        println!("0. Back");
        match read_line("Choice: ").as_str() {
            "1" => {
                let booking_id = BookingId::new(read_line("Booking ID: "));
                for (i, mode) in PaymentMode::ALL.iter().enumerate() {
                    println!("{}. {}", i + 1, mode);
                }
                let mode = match read_line("Mode: ").as_str() {
                    "1" => PaymentMode::Cash,
                    "3" => PaymentMode::Card,
                    "4" => PaymentMode::NetBanking,
                    _ => PaymentMode::Upi,
                };
                let cmd = RecordPaymentCommand { booking_id, mode };
                match app.record_payment.handle(cmd).await {
                    Ok(payment) => {
                        println!("Recorded: {} for {}", payment.id, payment.amount)
                    }
                    Err(err) => println!("Error: {}", err),
                }
            }
            "2" => {
                let id = PaymentId::new(read_line("Payment ID: "));
                match app.payments.find_by_id(&id).await {
                    Ok(Some(payment)) => println!("{}", payment.describe()),
                    Ok(None) => println!("Payment not found: {}", id),
                    Err(err) => println!("Error: {}", err),
                }
            }
            "3" => {
                let id = BookingId::new(read_line("Booking ID: "));
                match app.payments.list_by_booking(&id).await {
                    Ok(payments) if payments.is_empty() => println!("No payments."),
                    Ok(payments) => {
                        for payment in payments {
                            println!(
                                "[{}] {} | {} | {}",
                                payment.id, payment.amount, payment.mode, payment.status
                            );
                        }
                    }
                    Err(err) => println!("Error: {}", err),
                }
            }
            "4" => {
                let id = PaymentId::new(read_line("Payment ID: "));
                match app.payments.refund(&id).await {
                    Ok(payment) => println!("Refunded: {}", payment.id),
                    Err(err) => println!("Error: {}", err),
                }
            }
            "0" => break,
            _ => println!("Invalid choice."),
        }
    }
}

async fn complaint_menu(app: &App) {
    loop {
        println!();
        println!("1. File complaint");
        println!("2. View complaint");
        println!("3. List complaints for customer");
        println!("4. Mark in progress");
        println!("5. Resolve complaint");
        println!("6. Close complaint");
        println!("0. Back");
        match read_line("Choice: ").as_str() {
            "1" => {
                let cmd = FileComplaintCommand {
                    customer_id: CustomerId::new(read_line("Customer ID: ")),
                    description: read_line("Description: "),
                };
                match app.file_complaint.handle(cmd).await {
                    Ok(complaint) => println!("Filed: {}", complaint.id),
                    Err(err) => println!("Error: {}", err),
                }
            }
            "2" => {
                let id = ComplaintId::new(read_line("Complaint ID: "));
                match app.complaints.find_by_id(&id).await {
                    Ok(Some(complaint)) => println!("{}", complaint.describe()),
                    Ok(None) => println!("Complaint not found: {}", id),
                    Err(err) => println!("Error: {}", err),
                }
            }
            "3" => {
                let id = CustomerId::new(read_line("Customer ID: "));
                match app.complaints.list_by_customer(&id).await {
                    Ok(complaints) if complaints.is_empty() => println!("No complaints."),
                    Ok(complaints) => {
                        for complaint in complaints {
                            println!(
                                "[{}] {} | {}",
                                complaint.id, complaint.status, complaint.description
                            );
                        }
                    }
                    Err(err) => println!("Error: {}", err),
                }
            }
            "4" => {
                let id = ComplaintId::new(read_line("Complaint ID: "));
                report_result(app.complaints.mark_in_progress(&id).await.map(|c| c.id));
            }
            "5" => {
                let id = ComplaintId::new(read_line("Complaint ID: "));
                report_result(app.complaints.resolve(&id).await.map(|c| c.id));
            }
            "6" => {
                let id = ComplaintId::new(read_line("Complaint ID: "));
                report_result(app.complaints.close(&id).await.map(|c| c.id));
            }
            "0" => break,
            _ => println!("Invalid choice."),
        }
    }
}

async fn reports_menu(app: &App) {
    println!();
    match app.customers.report().await {
        Ok(report) => println!(
            "Customers: {} total | {} active | {} inactive | {} suspended | {} domestic | {} commercial",
            report.total, report.active, report.inactive, report.suspended, report.domestic,
            report.commercial
        ),
        Err(err) => println!("Error: {}", err),
    }
    match app.bookings.report().await {
        Ok(report) => println!(
            "Bookings: {} total | {} pending | {} confirmed | {} out for delivery | {} delivered | {} cancelled",
            report.total, report.pending, report.confirmed, report.out_for_delivery,
            report.delivered, report.cancelled
        ),
        Err(err) => println!("Error: {}", err),
    }
    match app.payments.report().await {
        Ok(report) => println!(
            "Payments: {} total | {} completed | {} pending | {} refunded | revenue {} | cash {} / upi {} / card {} / net banking {}",
            report.total, report.completed, report.pending, report.refunded, report.total_revenue,
            report.by_mode.cash, report.by_mode.upi, report.by_mode.card,
            report.by_mode.net_banking
        ),
        Err(err) => println!("Error: {}", err),
    }
    match app.complaints.report().await {
        Ok(report) => println!(
            "Complaints: {} total | {} open | {} in progress | {} resolved | {} closed",
            report.total, report.open, report.in_progress, report.resolved, report.closed
        ),
        Err(err) => println!("Error: {}", err),
    }
}

async fn show_dashboard(app: &App) {
    match app.dashboard.handle().await {
        Ok(overview) => {
            println!();
            println!("--- Dashboard ({}) ---", overview.generated_at.display_date());
            println!("Total customers      : {}", overview.total_customers);
            println!("Active connections   : {}", overview.active_connections);
            println!("Total bookings       : {}", overview.total_bookings);
            println!("Pending deliveries   : {}", overview.pending_deliveries);
            println!("Completed deliveries : {}", overview.completed_deliveries);
            println!("Total revenue        : {}", overview.total_revenue);
            println!("Open complaints      : {}", overview.open_complaints);
        }
        Err(err) => println!("Error: {}", err),
    }
}

fn report_result<T: std::fmt::Display>(
    result: Result<T, gas_agency_crm::domain::foundation::DomainError>,
) {
    match result {
        Ok(id) => println!("Done: {}", id),
        Err(err) => println!("Error: {}", err),
    }
}

fn read_line(prompt: &str) -> String {
    print!("{}", prompt);
    let _ = io::stdout().flush();
    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return String::new();
    }
    line.trim().to_string()
}

fn optional(input: String) -> Option<String> {
    if input.is_empty() {
        None
    } else {
        Some(input)
    }
}
