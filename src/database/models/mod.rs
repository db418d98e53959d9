pub mod movie;
pub mod movie_request;
pub mod movie_request_vote;
pub mod review;
pub mod user;

pub use movie::{Movie, NewMovie};
pub use movie_request::{MovieRequest, MovieRequestSummary};
pub use movie_request_vote::{MovieRequestVote, VoteToggle};
pub use review::{Review, ReviewWithAuthor};
pub use user::User;
