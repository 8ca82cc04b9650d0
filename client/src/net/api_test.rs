use super::*;

#[test]
fn chat_endpoint_path() {
    assert_eq!(CHAT_ENDPOINT, "/api/chat");
}

#[test]
fn chat_request_failed_message_formats_status() {
    assert_eq!(chat_request_failed_message(502), "chat request failed: 502");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn post_chat_off_browser_is_failure() {
    let reply = futures::executor::block_on(post_chat("hello"));
    assert_eq!(reply, ChatReply::Failure);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_transport_delegates_to_post_chat() {
    let reply = futures::executor::block_on(HttpChatTransport.send("hello"));
    assert_eq!(reply, ChatReply::Failure);
}
