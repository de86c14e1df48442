use orchard::{Deferred, Error, Requester, capitalize, fetch_fruit, fetch_hello, sample_item};
use serde_json::{Value, json};
use tokio::sync::oneshot;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn fruit_obj() -> Value { json!({ "data": { "fruits": ["apple", "orange", "banana", "pear", "peach"] } }) }

/// Stand-in whose `get` resolves to a fixed body.
struct FakeRequest(Value);

impl Requester for FakeRequest {
    type Response = Value;
    type Error = String;

    fn get(&self, _url: &str) -> impl Future<Output = Result<Value, String>> + Send {
        Deferred::resolved(self.0.clone())
    }
}

/// Stand-in whose `get` rejects with a bare message.
struct BadRequest(&'static str);

impl Requester for BadRequest {
    type Response = Value;
    type Error = &'static str;

    fn get(&self, _url: &str) -> impl Future<Output = Result<Value, &'static str>> + Send {
        Deferred::rejected(self.0)
    }
}

mod capitalize_tests {
    use super::*;

    #[test]
    fn capitalizes_a_single_string() {
        let input = capitalize(&json!("hello")).unwrap();
        let actual = "Hello";
        assert_eq!(input, actual);
    }

    #[test]
    fn errors_if_given_a_number() {
        let err = capitalize(&json!(42)).unwrap_err();
        assert!(err.to_string().contains("not a string"));
    }

    #[test]
    fn errors_if_not_given_a_string() {
        let inputs = [json!(42), Value::Null, json!(true), json!([]), json!({})];
        for input in &inputs {
            let err = capitalize(input).unwrap_err();
            assert_eq!(err.to_string(), "capitalize: not a string", "input: {input}");
        }
    }
}

mod sample_item_tests {
    use super::*;

    #[test]
    fn samples_a_random_item_from_an_array() {
        let fruits = json!(["apple", "banana", "orange", "pear"]);
        let input = sample_item(&fruits).unwrap();
        assert!(fruits.as_array().unwrap().contains(input));
    }

    #[test]
    fn errors_if_item_is_not_an_array() {
        let inputs = [json!(42), json!("hello"), json!({}), Value::Null, json!(true)];
        for input in &inputs {
            let err = sample_item(input).unwrap_err();
            assert_eq!(err.to_string(), "sampleItem: not an array", "input: {input}");
        }
    }
}

mod fetch_hello_tests {
    use super::*;

    #[tokio::test]
    async fn returns_hello_world_via_continuation() {
        let (tx, rx) = oneshot::channel();
        let _handle = fetch_hello()
            .then(|message| assert_eq!(message, "hello world"))
            .on_settled(move |res| {
                let _ = tx.send(res.is_ok());
            });

        assert!(rx.await.unwrap());
    }

    #[tokio::test]
    async fn returns_hello_world_via_await() {
        let input = fetch_hello().await;
        let actual = Ok("hello world".to_string());
        assert_eq!(input, actual);
    }
}

mod fetch_fruit_tests {
    use super::*;

    #[tokio::test]
    async fn fake_fetches_a_fruit_object() {
        init_tracing();
        let fake = FakeRequest(fruit_obj());

        let resp = fetch_fruit("fruit", &fake).await.unwrap();
        assert_eq!(resp, fruit_obj());
    }

    #[tokio::test]
    async fn fetches_samples_and_capitalizes_together() {
        init_tracing();
        let fake = FakeRequest(fruit_obj());
        let known = ["Apple", "Orange", "Banana", "Pear", "Peach"];

        let fruit = fetch_fruit("fruit", &fake)
            .then(|resp| {
                let fruits = &resp["data"]["fruits"];
                let random_fruit = sample_item(fruits).unwrap();
                assert!(fruits.as_array().unwrap().contains(random_fruit));
                capitalize(random_fruit).unwrap()
            })
            .await
            .unwrap();

        assert!(known.contains(&fruit.as_str()), "unexpected fruit {fruit}");
    }

    #[tokio::test]
    async fn wraps_error_from_bad_request() {
        init_tracing();
        let bad = BadRequest("nar mate");

        let err = fetch_fruit("dog", &bad).await.unwrap_err();
        assert_eq!(err.to_string(), "fetchFruit: nar mate");
        assert_eq!(err, Error::Fetch("nar mate".into()));
    }

    #[tokio::test]
    async fn catch_observes_wrapped_error() {
        let bad = BadRequest("nar mate");

        let message = fetch_fruit("dog", &bad).catch(|err| err.to_string()).await.unwrap_err();
        assert_eq!(message, "fetchFruit: nar mate");
    }
}
