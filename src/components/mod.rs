pub mod restaurant_card;
pub mod review_form;
pub mod reviews_list;
pub mod search_form;
pub mod search_reviews;
pub mod star_rating;
pub mod submit_review_modal;
