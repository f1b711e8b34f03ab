use std::time::Duration;

use egui_kittest::Harness;
use serde_json::{Value, json};
use userdeck_business::LoadUsersPageCommand;
use userdeck_ui::UserDeckApp;
use userdeck_ui::state::State;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct TestCtx<'a> {
    _mock_server: MockServer,
    harness: Harness<'a, UserDeckApp>,
}

impl<'a> TestCtx<'a> {
    /// App backed by a mock server with the given pages mounted; unmounted pages 404.
    pub async fn new_app(pages: Vec<(u32, ResponseTemplate)>) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mock_server = MockServer::start().await;
        for (page, response) in pages {
            mount_page(&mock_server, page, response).await;
        }

        let app = UserDeckApp::new(State::test(mock_server.uri()));
        let harness = Harness::new_eframe(|_| app);

        Self {
            _mock_server: mock_server,
            harness,
        }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, UserDeckApp> {
        &mut self.harness
    }

    /// Step frames until no page load is in flight.
    pub async fn settle(&mut self) {
        for _ in 0..100 {
            tokio::time::sleep(Duration::from_millis(20)).await;
            self.harness.step();
            if !self
                .harness
                .state()
                .state
                .ctx
                .has_pending_tasks::<LoadUsersPageCommand>()
            {
                break;
            }
        }
        // One more frame so widgets reflect the synced state.
        self.harness.step();
    }
}

async fn mount_page(server: &MockServer, page: u32, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("_page", page.to_string()))
        .respond_with(response)
        .mount(server)
        .await;
}

pub fn ok(body: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}

pub fn first_page() -> Value {
    json!([
        {
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "phone": "1-770-736-8031",
            "address": { "city": "Gwenborough", "zipcode": "92998-3874" }
        },
        {
            "id": 2,
            "name": "Ervin Howell",
            "username": "Antonette",
            "email": "Shanna@melissa.tv"
        },
        {
            "id": 3,
            "name": "Clementine Bauch",
            "username": "Samantha",
            "email": "Nathan@yesenia.net"
        }
    ])
}

#[allow(unused)]
pub fn second_page() -> Value {
    json!([
        {
            "id": 6,
            "name": "Mrs. Dennis Schulist",
            "username": "Leopoldo_Corkery",
            "email": "Karley_Dach@jasper.info"
        },
        {
            "id": 7,
            "name": "Kurtis Weissnat",
            "username": "Elwyn.Skiles",
            "email": "Telly.Hoeger@billy.biz"
        }
    ])
}

#[allow(unused)]
pub fn lone_record() -> Value {
    json!([
        {
            "id": 11,
            "name": "Nicholas Runolfsdottir V",
            "username": "Maxime_Nienow",
            "email": "Sherwood@rosamond.me"
        }
    ])
}
