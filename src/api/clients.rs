use serde::Deserialize;
use sqlx::SqlitePool;

use super::error::AppError;
use super::resource::Resource;
use crate::db::models::ClientRow;
use crate::db::repository::{SqliteQuery, Table};
use crate::views::{AddClientView, ClientListView, EditClientView};

/// Submitted client fields
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientForm {
    pub name: String,
    pub industry: String,
    pub contact_info: String,
    pub address: String,
    pub contract_details: String,
}

pub struct Clients;

impl Table for Clients {
    const TABLE: &'static str = "Client";
    const KEY: &'static str = "ClientID";
    const COLUMNS: &'static [&'static str] =
        &["Name", "Industry", "ContactInfo", "Address", "ContractDetails"];

    type Row = ClientRow;
    type Form = ClientForm;

    fn bind<'q>(form: &'q ClientForm, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(&form.name)
            .bind(&form.industry)
            .bind(&form.contact_info)
            .bind(&form.address)
            .bind(&form.contract_details)
    }
}

impl Resource for Clients {
    const ROUTE: &'static str = "/clients";
    const LABEL: &'static str = "Client";
    const PLURAL: &'static str = "clients";

    type ListView = ClientListView;
    type AddView = AddClientView;
    type EditView = EditClientView;

    fn list_view(clients: Vec<ClientRow>) -> ClientListView {
        ClientListView { clients }
    }

    async fn add_view(_pool: &SqlitePool) -> Result<AddClientView, AppError> {
        Ok(AddClientView)
    }

    async fn edit_view(_pool: &SqlitePool, client: ClientRow) -> Result<EditClientView, AppError> {
        Ok(EditClientView { client })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{body_text, location, post_form};
    use crate::db::{connection, repository};
    use actix_web::test;

    const ACME: [(&str, &str); 5] = [
        ("name", "Acme"),
        ("industry", "Retail"),
        ("contactInfo", "a@x.com"),
        ("address", "1 Main St"),
        ("contractDetails", "net-30"),
    ];

    #[actix_web::test]
    async fn add_redirects_and_list_shows_the_new_client() {
        let pool = connection::in_memory().await;
        let app = test::init_service(crate::api::testing::app(pool.clone())).await;

        let req = post_form("/clients/add", &ACME).to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 302);
        assert_eq!(location(&resp), "/clients");

        let req = test::TestRequest::get().uri("/clients").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 200);
        let html = body_text(resp).await;
        assert!(html.contains("Acme"));
        assert!(html.contains("net-30"));

        let rows = repository::list::<Clients>(&pool).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Acme");
        assert_eq!(rows[0].industry, "Retail");
        assert_eq!(rows[0].contact_info, "a@x.com");
        assert_eq!(rows[0].address, "1 Main St");
        assert_eq!(rows[0].contract_details, "net-30");
    }

    #[actix_web::test]
    async fn edit_overwrites_every_field() {
        let pool = connection::in_memory().await;
        let app = test::init_service(crate::api::testing::app(pool.clone())).await;
        let req = post_form("/clients/add", &ACME).to_request();
        test::call_service(&app, req).await;
        let id = repository::list::<Clients>(&pool).await.unwrap()[0].client_id;

        let edited = [
            ("name", "Acme Corp"),
            ("industry", "Wholesale"),
            ("contactInfo", "b@x.com"),
            ("address", "2 High St"),
            ("contractDetails", "net-60"),
        ];
        let req = post_form(&format!("/clients/edit/{}", id), &edited).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(location(&resp), "/clients");

        let row = repository::find::<Clients>(&pool, id).await.unwrap().unwrap();
        assert_eq!(row.name, "Acme Corp");
        assert_eq!(row.industry, "Wholesale");
        assert_eq!(row.contact_info, "b@x.com");
        assert_eq!(row.address, "2 High St");
        assert_eq!(row.contract_details, "net-60");
    }

    #[actix_web::test]
    async fn edit_form_is_prefilled() {
        let pool = connection::in_memory().await;
        let app = test::init_service(crate::api::testing::app(pool.clone())).await;
        let req = post_form("/clients/add", &ACME).to_request();
        test::call_service(&app, req).await;
        let id = repository::list::<Clients>(&pool).await.unwrap()[0].client_id;

        let req = test::TestRequest::get().uri(&format!("/clients/edit/{}", id)).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 200);
        let html = body_text(resp).await;
        assert!(html.contains(r#"value="Acme""#));
        assert!(html.contains(&format!(r#"action="/clients/edit/{}""#, id)));
    }

    #[actix_web::test]
    async fn delete_referenced_client_is_a_store_error() {
        let pool = connection::in_memory().await;
        let app = test::init_service(crate::api::testing::app(pool.clone())).await;
        let req = post_form("/clients/add", &ACME).to_request();
        test::call_service(&app, req).await;
        let id = repository::list::<Clients>(&pool).await.unwrap()[0].client_id;

        let client_id = id.to_string();
        let assignment = [
            ("jobDescription", "Stocking"),
            ("startDate", "2024-01-01"),
            ("endDate", "2024-02-01"),
            ("hours", "40"),
            ("payRate", "18.5"),
            ("clientId", client_id.as_str()),
        ];
        let req = post_form("/jobAssignments/add", &assignment).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 302);

        let req = test::TestRequest::get().uri(&format!("/clients/delete/{}", id)).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 500);
        let body = body_text(resp).await;
        assert!(body.starts_with("Error deleting client: "), "{}", body);
        assert!(body.contains("FOREIGN KEY constraint failed"), "{}", body);

        assert_eq!(repository::list::<Clients>(&pool).await.unwrap().len(), 1);
    }
}
