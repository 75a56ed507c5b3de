use httpmock::prelude::*;
use staff_roster::{
    CompanyHttpClient, ConfigProvider, Employee, ScheduleService, BAD_RESPONSE,
    DEFAULT_RAISE_MULTIPLIER,
};

struct TestConfig {
    base_url: String,
}

impl ConfigProvider for TestConfig {
    fn schedule_base_url(&self) -> &str {
        &self.base_url
    }

    fn raise_multiplier(&self) -> f64 {
        DEFAULT_RAISE_MULTIPLIER
    }
}

#[tokio::test]
async fn test_monthly_schedule_with_real_http() {
    let server = MockServer::start();

    let schedule_mock = server.mock(|when, then| {
        when.method(GET).path("/Bobson/May");
        then.status(200).body("Success");
    });

    let config = TestConfig {
        base_url: server.base_url(),
    };
    let service = ScheduleService::new(CompanyHttpClient::new(), config);
    let employee = Employee::new("Bob", "Bobson", 50000);

    let schedule = service.monthly_schedule(&employee, "May").await.unwrap();

    schedule_mock.assert();
    assert_eq!(schedule, "Success");
}

#[tokio::test]
async fn test_monthly_schedule_with_server_error() {
    let server = MockServer::start();

    let schedule_mock = server.mock(|when, then| {
        when.method(GET).path("/Brianson/June");
        then.status(500);
    });

    let config = TestConfig {
        base_url: server.base_url(),
    };
    let service = ScheduleService::new(CompanyHttpClient::new(), config);
    let employee = Employee::new("Brian", "Brianson", 60000);

    let schedule = service.monthly_schedule(&employee, "June").await.unwrap();

    schedule_mock.assert();
    assert_eq!(schedule, BAD_RESPONSE);
}

#[tokio::test]
async fn test_monthly_schedule_with_not_found() {
    let server = MockServer::start();

    let schedule_mock = server.mock(|when, then| {
        when.method(GET).path("/Bobson/Smarch");
        then.status(404).body("no such month");
    });

    let config = TestConfig {
        base_url: server.base_url(),
    };
    let service = ScheduleService::new(CompanyHttpClient::new(), config);
    let employee = Employee::new("Bob", "Bobson", 50000);

    let schedule = service
        .monthly_schedule(&employee, "Smarch")
        .await
        .unwrap();

    schedule_mock.assert();
    assert_eq!(schedule, BAD_RESPONSE);
}

#[tokio::test]
async fn test_raise_then_schedule_end_to_end() {
    let server = MockServer::start();

    let schedule_mock = server.mock(|when, then| {
        when.method(GET).path("/Bobson/May");
        then.status(200).body("Mon-Fri 9-5");
    });

    let config = TestConfig {
        base_url: server.base_url(),
    };
    let multiplier = config.raise_multiplier();
    let service = ScheduleService::new(CompanyHttpClient::new(), config);

    let mut employee = Employee::new("Bob", "Bobson", 50000);
    employee.apply_raise(multiplier);
    assert_eq!(employee.pay, 52500);

    let schedule = service.monthly_schedule(&employee, "May").await.unwrap();

    schedule_mock.assert();
    assert_eq!(schedule, "Mon-Fri 9-5");
    assert_eq!(employee.email(), "Bob.Bobson@email.com");
    assert_eq!(employee.fullname(), "Bob Bobson");
}
