use actix_web::web;

pub mod auth;
pub mod bookings;
pub mod cars;
pub mod users;

/// Route table. Browsing and auth are public; everything that mutates the
/// fleet, and all booking/user routes, require a bearer token.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/register", web::post().to(auth::register))
        .route("/login", web::post().to(auth::login))
        .service(
            web::scope("/cars")
                .route("", web::get().to(cars::get_cars))
                .route("", web::post().to(cars::create_car))
                // Must come before the `{id}` routes or it matches as an id.
                .route("/search", web::get().to(cars::search_cars))
                .route("/{id}", web::get().to(cars::get_car_by_id))
                .route("/{id}", web::put().to(cars::update_car))
                .route("/{id}", web::delete().to(cars::delete_car)),
        )
        .service(
            web::scope("/bookings")
                .route("", web::get().to(bookings::get_bookings))
                .route("", web::post().to(bookings::create_booking))
                .route("/user/{user_id}", web::get().to(bookings::get_user_bookings))
                .route("/{id}", web::patch().to(bookings::update_booking_status))
                .route("/{id}", web::delete().to(bookings::delete_booking)),
        )
        .service(
            web::scope("/users")
                .route("", web::get().to(users::get_users))
                .route("/{id}", web::get().to(users::get_user_by_id)),
        );
}
