/// Wraps each listed `async fn(LookupTest)` in a `#[test]` that runs it on a
/// fresh runtime against a recording transport.
#[macro_export]
macro_rules! tests {
    (
        $(
            $( #[$attrs:meta] )*
            $f:ident
        ),+ $(,)?
    ) => {
        mod recording {
            $(
                #[test]
                $( #[$attrs] )*
                fn $f() {
                    let mut test = $crate::ClientTest::new($crate::LookupTest::new());

                    test.run_test(|lookup| async move {
                        super::$f(lookup).await;
                    });
                }
            )*
        }
    };
}
