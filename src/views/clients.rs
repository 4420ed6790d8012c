use askama::Template;

use crate::db::models::ClientRow;

#[derive(Template)]
#[template(path = "clients.html")]
pub struct ClientListView {
    pub clients: Vec<ClientRow>,
}

#[derive(Template)]
#[template(path = "add_client.html")]
pub struct AddClientView;

#[derive(Template)]
#[template(path = "edit_client.html")]
pub struct EditClientView {
    pub client: ClientRow,
}
