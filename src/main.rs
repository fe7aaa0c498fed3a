#[actix_web::main]
async fn main() -> std::io::Result<()> {
    quotegen_server::run().await
}
