use moon::*;
use shared::UpMsg;

async fn frontend() -> Frontend {
    Frontend::new()
        .title("PayTools - Payment Infrastructure for Developers")
        .index_by_robots(false)
}

// The landing page never sends messages; log anything unexpected and drop it.
async fn up_msg_handler(req: UpMsgRequest<UpMsg>) {
    println!("Unexpected message from {}: {:?}", req.session_id, req.up_msg);
}

#[moon::main]
async fn main() -> std::io::Result<()> {
    start(frontend, up_msg_handler, |_error| {}).await
}
