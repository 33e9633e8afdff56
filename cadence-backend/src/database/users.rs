use cadence_api::user;
use educe::Educe;

#[derive(Clone, Educe)]
#[educe(Debug)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[educe(Debug(ignore))]
    pub password: String,
    pub history_tracking: bool,
}

impl User {
    pub fn has_email(&self, email: &str) -> bool {
        self.email.eq_ignore_ascii_case(email)
    }
}

impl From<user::create::Request> for User {
    fn from(request: user::create::Request) -> Self {
        let user::create::Request { id, name, email, password, history_tracking } = request;
        Self { id, name, email, password, history_tracking }
    }
}

impl From<User> for user::User {
    fn from(value: User) -> Self {
        let User { id, name, email, history_tracking, .. } = value;
        Self { id, name, email, history_tracking }
    }
}
