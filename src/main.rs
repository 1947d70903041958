//
// Copyright (c) 2023 Nathan Fiedler
//
use actix_web::{
    delete, get, http::header::ContentType, middleware, post, put, web, App, HttpResponse,
    HttpServer, Responder,
};
use anyhow::{anyhow, Error};
use employee_service::data::repositories::EmployeeRepositoryImpl;
use employee_service::data::sources::{build_data_source, DataSourceType};
use employee_service::domain::entities::Employee;
use employee_service::domain::repositories::EmployeeRepository;
use employee_service::domain::usecases::{
    create_employee, fetch_employee, remove_employee, update_employee, NoParams, UseCase,
};
use employee_service::domain::usecases::{
    create_employee::CreateEmployee, fetch_employee::FetchEmployee,
    list_employees::ListEmployees, remove_all_employees::RemoveAllEmployees,
    remove_employee::RemoveEmployee, update_employee::UpdateEmployee,
};
use log::{error, info};
use serde::{Deserialize, Serialize};
use std::{env, process, sync::Arc};

///
/// Uniform wrapper around every JSON response, at most one field is set.
///
#[derive(Debug, Serialize, Deserialize)]
struct Envelope<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

type Records = web::Data<dyn EmployeeRepository>;

//
// Run a use case on the blocking thread pool, the data sources are all
// synchronous.
//
async fn run_blocking<T, F>(f: F) -> Result<T, Error>
where
    F: FnOnce() -> Result<T, Error> + Send + 'static,
    T: Send + 'static,
{
    web::block(f)
        .await
        .map_err(|err| anyhow!("blocking task failed: {}", err))?
}

//
// Every failure is reported with the same status code, the message text
// tells the client what went wrong.
//
fn failure(action: &str, err: Error) -> HttpResponse {
    error!("error while {}: {}", action, err);
    let body: Envelope<()> = Envelope {
        data: None,
        error: Some(err.to_string()),
    };
    HttpResponse::BadRequest().json(body)
}

fn respond<T: Serialize>(action: &str, result: Result<T, Error>) -> HttpResponse {
    match result {
        Ok(data) => HttpResponse::Ok().json(Envelope {
            data: Some(data),
            error: None,
        }),
        Err(err) => failure(action, err),
    }
}

fn decode_employee(body: &[u8]) -> Result<Employee, Error> {
    let employee: Employee = serde_json::from_slice(body)?;
    Ok(employee)
}

#[post("/employee")]
async fn post_employee(records: Records, body: web::Bytes) -> impl Responder {
    let employee = match decode_employee(&body) {
        Ok(employee) => employee,
        Err(err) => return failure("decoding request body", err),
    };
    let usecase = CreateEmployee::new(records.into_inner());
    let params = create_employee::Params::from(employee);
    let result = run_blocking(move || usecase.call(params)).await;
    if let Ok(employee_id) = &result {
        info!("employee inserted with id: {}", employee_id);
    }
    respond("inserting employee", result)
}

#[get("/employee/{id}")]
async fn get_employee(records: Records, path: web::Path<String>) -> impl Responder {
    let employee_id = path.into_inner();
    info!("getting employee with id: {}", employee_id);
    let usecase = FetchEmployee::new(records.into_inner());
    let params = fetch_employee::Params { employee_id };
    let result = run_blocking(move || usecase.call(params)).await;
    respond("getting employee", result)
}

#[get("/employee")]
async fn get_employees(records: Records) -> impl Responder {
    let usecase = ListEmployees::new(records.into_inner());
    let result = run_blocking(move || usecase.call(NoParams {})).await;
    respond("getting employees", result)
}

#[put("/employee/{id}")]
async fn put_employee(
    records: Records,
    path: web::Path<String>,
    body: web::Bytes,
) -> impl Responder {
    let employee_id = path.into_inner();
    info!("updating employee with id: {}", employee_id);
    if employee_id.is_empty() {
        return failure(
            "updating employee",
            employee_service::Error::MissingIdentifier.into(),
        );
    }
    let employee = match decode_employee(&body) {
        Ok(employee) => employee,
        Err(err) => return failure("decoding request body", err),
    };
    let usecase = UpdateEmployee::new(records.into_inner());
    let params = update_employee::Params {
        employee_id,
        employee,
    };
    let result = run_blocking(move || usecase.call(params)).await;
    respond("updating employee", result)
}

#[delete("/employee/{id}")]
async fn delete_employee(records: Records, path: web::Path<String>) -> impl Responder {
    let employee_id = path.into_inner();
    info!("deleting employee with id: {}", employee_id);
    let usecase = RemoveEmployee::new(records.into_inner());
    let params = remove_employee::Params { employee_id };
    let result = run_blocking(move || usecase.call(params)).await;
    respond("deleting employee", result)
}

#[delete("/employee")]
async fn delete_employees(records: Records) -> impl Responder {
    let usecase = RemoveAllEmployees::new(records.into_inner());
    let result = run_blocking(move || usecase.call(NoParams {})).await;
    respond("deleting all employees", result)
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body("running...")
}

fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(health)
        .service(post_employee)
        .service(get_employee)
        .service(get_employees)
        .service(put_employee)
        .service(delete_employee)
        .service(delete_employees);
}

async fn serve(records: Arc<dyn EmployeeRepository>, addr: String) -> std::io::Result<()> {
    let records: Records = web::Data::from(records);
    info!("listening on http://{}/...", addr);
    HttpServer::new(move || {
        App::new()
            .app_data(records.clone())
            .wrap(middleware::Logger::default())
            .configure(config)
    })
    .bind(addr)?
    .run()
    .await
}

fn main() {
    dotenv::dotenv().ok();
    env_logger::init();
    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());
    let port = env::var("PORT").unwrap_or_else(|_| "3000".to_owned());
    let addr = format!("{}:{}", host, port);
    // connect before starting the runtime, the store client blocks
    let source = match DataSourceType::from_env().and_then(build_data_source) {
        Ok(source) => source,
        Err(err) => {
            error!("error while connecting to data source: {}", err);
            process::exit(1);
        }
    };
    let records: Arc<dyn EmployeeRepository> =
        Arc::new(EmployeeRepositoryImpl::new(source.clone()));
    let result = actix_web::rt::System::new().block_on(serve(records, addr));
    // server returns on completion or upon receiving a termination signal
    source.close();
    if let Err(err) = result {
        error!("server failed: {}", err);
        process::exit(1);
    }
}
