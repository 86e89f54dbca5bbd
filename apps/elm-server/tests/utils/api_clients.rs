use std::io::{Cursor, Read};
use std::sync::OnceLock;

use serde::de::DeserializeOwned;

pub fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(|| reqwest::ClientBuilder::new().build().unwrap())
}

#[derive(Clone)]
pub struct Client {
    base_url: String,
    token: String,
}

impl Client {
    pub fn new(base_url: String, token: String) -> Self {
        Self { base_url, token }
    }

    pub async fn credential_builder(&self, course_id: &str, query: &[(&str, &str)]) -> Response {
        self.get(
            &format!("/api/elm-credentials/v1/{course_id}/credential-builder"),
            query,
        )
        .await
    }

    pub async fn get(&self, url: &str, query: &[(&str, &str)]) -> Response {
        let url = format!("{}{url}", self.base_url);

        let mut request = http_client().get(url).query(query);
        if !self.token.is_empty() {
            request = request.bearer_auth(&self.token);
        }

        Response {
            resp: request.send().await.unwrap(),
        }
    }
}

pub struct Response {
    resp: reqwest::Response,
}

impl Response {
    pub fn status(&self) -> u16 {
        self.resp.status().into()
    }

    pub fn header(&self, name: &str) -> Option<String> {
        self.resp
            .headers()
            .get(name)
            .map(|value| value.to_str().unwrap().to_owned())
    }

    pub async fn json<T: DeserializeOwned>(self) -> T {
        let full = self.resp.bytes().await.unwrap();
        serde_json::from_slice(&full).unwrap()
    }

    /// Entry name and content of every file in a ZIP response body
    pub async fn zip_entries(self) -> Vec<(String, String)> {
        let full = self.resp.bytes().await.unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(full.to_vec())).unwrap();

        (0..archive.len())
            .map(|index| {
                let mut file = archive.by_index(index).unwrap();
                let mut content = String::new();
                file.read_to_string(&mut content).unwrap();
                (file.name().to_owned(), content)
            })
            .collect()
    }
}
