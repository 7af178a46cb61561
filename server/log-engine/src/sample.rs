//! Built-in sample dumpstate excerpt: a crash, an ANR and a caught socket exception.

/// File name reported for the sample source.
pub const SAMPLE_NAME: &str = "sample_dumpstate.txt";

/// A short logcat excerpt in threadtime layout.
pub const SAMPLE_LOG: &str = r#"01-22 10:30:45.123  1000  1000 E AndroidRuntime: FATAL EXCEPTION: main
01-22 10:30:45.123  1000  1000 E AndroidRuntime: Process: com.example.shopapp, PID: 1000
01-22 10:30:45.123  1000  1000 E AndroidRuntime: java.lang.NullPointerException: Attempt to invoke virtual method 'void android.widget.TextView.setText(java.lang.CharSequence)' on a null object reference
01-22 10:30:45.123  1000  1000 E AndroidRuntime: 	at com.example.shopapp.ui.MainActivity.updateCartCount(MainActivity.java:142)
01-22 10:30:45.123  1000  1000 E AndroidRuntime: 	at com.example.shopapp.ui.MainActivity.onCreate(MainActivity.java:42)
01-22 10:30:45.123  1000  1000 E AndroidRuntime: 	at android.app.Activity.performCreate(Activity.java:8000)
01-22 10:30:45.123  1000  1000 E AndroidRuntime: 	at android.app.Instrumentation.callActivityOnCreate(Instrumentation.java:1307)
01-22 10:30:45.123  1000  1000 E AndroidRuntime: 	at android.app.ActivityThread.performLaunchActivity(ActivityThread.java:3478)
01-22 10:30:45.123  1000  1000 E AndroidRuntime: 	at android.app.ActivityThread.handleLaunchActivity(ActivityThread.java:3692)
01-22 10:30:45.123  1000  1000 E AndroidRuntime: 	at android.app.servertransaction.LaunchActivityItem.execute(LaunchActivityItem.java:85)
01-22 10:30:45.123  1000  1000 E AndroidRuntime: 	at android.app.servertransaction.TransactionExecutor.executeCallbacks(TransactionExecutor.java:135)
01-22 10:30:45.123  1000  1000 E AndroidRuntime: 	at android.app.servertransaction.TransactionExecutor.execute(TransactionExecutor.java:95)
01-22 10:30:45.123  1000  1000 E AndroidRuntime: 	at android.app.ActivityThread$H.handleMessage(ActivityThread.java:2126)
01-22 10:30:45.123  1000  1000 E AndroidRuntime: 	at android.os.Handler.dispatchMessage(Handler.java:106)
01-22 10:30:45.123  1000  1000 E AndroidRuntime: 	at android.os.Looper.loop(Looper.java:236)
01-22 10:30:45.123  1000  1000 E AndroidRuntime: 	at android.app.ActivityThread.main(ActivityThread.java:7861)

01-22 10:35:12.500  2000  2020 E ActivityManager: ANR in com.social.feed
01-22 10:35:12.500  2000  2020 E ActivityManager: PID: 5541
01-22 10:35:12.500  2000  2020 E ActivityManager: Reason: Input dispatching timed out (Waiting because no window has focus but there is a focused application that may eventually add a window when it finishes starting up.)
01-22 10:35:12.500  2000  2020 E ActivityManager: Load: 5.4 / 4.1 / 3.8
01-22 10:35:12.500  2000  2020 E ActivityManager: CPU usage from 0ms to 8465ms later (2024-01-22 10:35:03.987 to 2024-01-22 10:35:12.452):
01-22 10:35:12.500  2000  2020 E ActivityManager:   50% 5541/com.social.feed: 45% user + 5% kernel / faults: 1234 minor
01-22 10:35:12.500  2000  2020 E ActivityManager:   10% 2000/system_server: 5% user + 5% kernel
01-22 10:35:12.500  2000  2020 E ActivityManager:   0.1% 100/kworker/u16:3: 0% user + 0.1% kernel

01-22 10:45:00.100  5000  5000 W System.err: java.net.SocketTimeoutException: timeout
01-22 10:45:00.100  5000  5000 W System.err: 	at com.android.okhttp.okio.Okio$2.read(Okio.java:144)
01-22 10:45:00.100  5000  5000 W System.err: 	at com.android.okhttp.internal.http.HttpConnection$FixedLengthSource.read(HttpConnection.java:450)
01-22 10:45:00.100  5000  5000 W System.err: 	at com.android.okhttp.internal.http.HttpEngine.readResponse(HttpEngine.java:613)
01-22 10:45:00.100  5000  5000 W System.err: 	at com.android.okhttp.internal.huc.HttpURLConnectionImpl.execute(HttpURLConnectionImpl.java:475)
01-22 10:45:00.100  5000  5000 W System.err: 	at com.android.okhttp.internal.huc.HttpURLConnectionImpl.getResponse(HttpURLConnectionImpl.java:411)
"#;

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::Category;

  #[test]
  fn sample_segments_crash_and_socket_error() {
    let out = crate::segment(SAMPLE_LOG);
    let cats: Vec<Category> = out.iter().map(|i| i.category).collect();
    // The ANR starts 17 lines after the crash, inside its suppression window.
    assert_eq!(cats, vec![Category::Fatal, Category::Exception]);
    assert_eq!(out[0].line_number, 1);
    assert_eq!(out[0].timestamp.as_deref(), Some("01-22 10:30:45.123"));
    assert_eq!(out[1].line_number, 27);
    assert!(out[0].context.contains("ANR in com.social.feed"));
  }
}
