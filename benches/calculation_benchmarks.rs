//! Performance benchmarks for the Payroll Calculation Engine.
//!
//! This benchmark suite covers the three ways a payroll is calculated:
//! - Component path: pre-bucketed hours priced and netted, < 10μs mean
//! - Full pipeline for one employee with a two-week attendance log, < 1ms mean
//! - The same request through the HTTP router, < 2ms mean
//! - Batch of 100 employees through the router, < 100ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use payroll_engine::api::{AppState, CalculationRequest, create_router};
use payroll_engine::calculation::{calculate_employee_payroll, calculate_payroll};
use payroll_engine::config::ConfigLoader;
use payroll_engine::models::{
    ContributionItem, DeductionItem, EmployeePayrollRequest, LoanObligation,
    PayrollCalculationInput,
};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Loads the default configuration and holiday calendar.
fn load_config() -> ConfigLoader {
    ConfigLoader::load("./config/default").expect("Failed to load config")
}

/// Creates a calculation request for one employee with `entry_count` attendance entries.
///
/// Every third entry runs to 10 hours and every fifth is a flagged night shift.
fn create_request(employee_id: &str, entry_count: usize) -> CalculationRequest {
    let attendance: Vec<serde_json::Value> = (0..entry_count)
        .map(|i| {
            let date = format!("2026-03-{:02}", (i % 15) + 1);
            let end_hour = if i % 3 == 0 { 18 } else { 16 };
            serde_json::json!({
                "date": date,
                "time_in": format!("{}T08:00:00", date),
                "time_out": format!("{}T{}:00:00", date, end_hour),
                "break_minutes": 0,
                "is_night_shift": i % 5 == 0,
                "status": "present"
            })
        })
        .collect();

    let request_json = serde_json::json!({
        "employee_id": employee_id,
        "pay_period": {
            "start_date": "2026-03-01",
            "end_date": "2026-03-15",
            "holidays": []
        },
        "rates": [
            { "amount": "15000", "rate_type": "monthly", "effective_date": "2025-01-01" },
            { "amount": "17600", "rate_type": "monthly", "effective_date": "2026-01-01" }
        ],
        "attendance": attendance,
        "deductions": [{ "amount": "500" }],
        "contributions": [{ "employee_share": "300", "employer_share": "600" }],
        "loans": [{ "monthly_payment": "200", "status": "active" }],
        "allowance_amount": "1000"
    });

    serde_json::from_value(request_json).expect("Failed to create request")
}

async fn post_calculate(state: AppState, body: String) -> axum::response::Response {
    create_router(state)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/payroll/calculate")
                .header("Content-Type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap()
}

/// Benchmark: Pricing and netting pre-bucketed hours.
///
/// Target: < 10μs mean
fn bench_component_path(c: &mut Criterion) {
    let loader = load_config();
    let mut input = PayrollCalculationInput::new(Decimal::new(80, 0), Decimal::new(100, 0));
    input.overtime_hours = Decimal::new(6, 0);
    input.night_differential_hours = Decimal::new(16, 0);
    input.allowance_amount = Decimal::new(1000, 0);
    input.deductions = vec![DeductionItem::new(Decimal::new(500, 0))];
    input.contributions = vec![ContributionItem::new(Decimal::new(300, 0))];
    input.loans = vec![LoanObligation::active(Decimal::new(200, 0))];

    c.bench_function("component_path", |b| {
        b.iter(|| black_box(calculate_payroll(black_box(&input), loader.config())))
    });
}

/// Benchmark: Full pipeline for one employee, called directly.
///
/// Target: < 1ms mean
fn bench_pipeline_direct(c: &mut Criterion) {
    let loader = load_config();
    let request: EmployeePayrollRequest = create_request("emp_bench_001", 10).into();

    c.bench_function("pipeline_10_entries", |b| {
        b.iter(|| black_box(calculate_employee_payroll(black_box(&request), &loader)))
    });
}

/// Benchmark: Full pipeline for one employee through the HTTP router.
///
/// Target: < 2ms mean
fn bench_pipeline_http(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = AppState::new(load_config());
    let body = serde_json::to_string(&create_request("emp_bench_001", 10)).unwrap();

    c.bench_function("http_10_entries", |b| {
        b.to_async(&rt)
            .iter(|| async { black_box(post_calculate(state.clone(), body.clone()).await) })
    });
}

/// Benchmark: Batch of 100 employees through the HTTP router.
///
/// Target: < 100ms mean
fn bench_batch_100(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = AppState::new(load_config());

    // Vary employee IDs and attendance sizes for a realistic run
    let requests: Vec<String> = (0..100)
        .map(|i| {
            let request = create_request(&format!("emp_batch_{:03}", i), 5 + i % 10);
            serde_json::to_string(&request).unwrap()
        })
        .collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(100));

    group.bench_function("batch_100", |b| {
        b.to_async(&rt).iter(|| async {
            let mut results = Vec::with_capacity(100);
            for body in &requests {
                results.push(post_calculate(state.clone(), body.clone()).await);
            }
            black_box(results)
        })
    });

    group.finish();
}

/// Benchmark: Various attendance sizes to understand scaling behavior.
fn bench_scaling(c: &mut Criterion) {
    let loader = load_config();

    let mut group = c.benchmark_group("scaling");

    for entry_count in [1, 5, 10, 15, 30].iter() {
        let request: EmployeePayrollRequest = create_request("emp_scale", *entry_count).into();

        group.throughput(Throughput::Elements(*entry_count as u64));
        group.bench_with_input(
            BenchmarkId::new("entries", entry_count),
            entry_count,
            |b, _| b.iter(|| black_box(calculate_employee_payroll(&request, &loader))),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_component_path,
    bench_pipeline_direct,
    bench_pipeline_http,
    bench_batch_100,
    bench_scaling,
);
criterion_main!(benches);
