use goldsect_server::{routes, History};

#[tokio::main]
async fn main() {
    let history = History::default();
    let routes = routes(history);

    println!("Server running on http://127.0.0.1:8000");
    warp::serve(routes).run(([127, 0, 0, 1], 8000)).await;
}
