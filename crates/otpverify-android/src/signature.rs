//! Signature hashing JNI interface
//!
//! Entry points for the `com.otpverify.android.OtpVerify` host class. The
//! host obtains signature chars strings from the package manager
//! (`Signature.toCharsString()`) and receives JSON responses.

use jni::objects::{JClass, JString};
use jni::sys::{jint, jstring};
use jni::JNIEnv;
use otpverify_core::{extract_otp, signature_hash};
use serde_json::json;

use crate::{to_java_string, to_jni_result, OtpVerifyAndroidError};

/// Compute app-signature hashes for a package
///
/// # Parameters
/// - `package_name`: the application's package identifier
/// - `certificates_json`: JSON array of signature chars strings
///
/// # Returns
/// JSON string:
/// ```json
/// {
///   "hashes": ["L1lD8GP/5Eo"]
/// }
/// ```
#[no_mangle]
pub extern "system" fn Java_com_otpverify_android_OtpVerify_getSignatureHashes<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    package_name: JString<'local>,
    certificates_json: JString<'local>,
) -> jstring {
    let result = get_signature_hashes_internal(&mut env, package_name, certificates_json);

    match to_jni_result(&mut env, result) {
        Some(json_str) => match to_java_string(&mut env, json_str) {
            Ok(jstr) => jstr,
            Err(_) => std::ptr::null_mut(),
        },
        None => std::ptr::null_mut(),
    }
}

fn get_signature_hashes_internal(
    env: &mut JNIEnv,
    package_name: JString,
    certificates_json: JString,
) -> Result<String, OtpVerifyAndroidError> {
    let package: String = env
        .get_string(&package_name)
        .map_err(|e| OtpVerifyAndroidError::JniError(format!("Failed to get package name: {}", e)))?
        .into();

    let certificates_str: String = env
        .get_string(&certificates_json)
        .map_err(|e| OtpVerifyAndroidError::JniError(format!("Failed to get certificates: {}", e)))?
        .into();

    hashes_response(&package, &certificates_str)
}

/// Compute the hash for a single signature chars string
///
/// # Parameters
/// - `package_name`: the application's package identifier
/// - `signature_chars`: one certificate's chars string
///
/// # Returns
/// JSON string:
/// ```json
/// {
///   "hash": "L1lD8GP/5Eo"
/// }
/// ```
#[no_mangle]
pub extern "system" fn Java_com_otpverify_android_OtpVerify_hashSignature<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    package_name: JString<'local>,
    signature_chars: JString<'local>,
) -> jstring {
    let result = hash_signature_internal(&mut env, package_name, signature_chars);

    match to_jni_result(&mut env, result) {
        Some(json_str) => match to_java_string(&mut env, json_str) {
            Ok(jstr) => jstr,
            Err(_) => std::ptr::null_mut(),
        },
        None => std::ptr::null_mut(),
    }
}

fn hash_signature_internal(
    env: &mut JNIEnv,
    package_name: JString,
    signature_chars: JString,
) -> Result<String, OtpVerifyAndroidError> {
    let package: String = env
        .get_string(&package_name)
        .map_err(|e| OtpVerifyAndroidError::JniError(format!("Failed to get package name: {}", e)))?
        .into();

    let chars: String = env
        .get_string(&signature_chars)
        .map_err(|e| OtpVerifyAndroidError::JniError(format!("Failed to get signature: {}", e)))?
        .into();

    let hash = signature_hash(&package, &chars);

    let response = json!({
        "hash": hash.as_str()
    });

    Ok(response.to_string())
}

/// Extract an OTP of a known digit count from a message body
///
/// # Parameters
/// - `message`: the received SMS body
/// - `num_digits`: expected OTP length
///
/// # Returns
/// JSON string with the OTP, or `null` when no code was found:
/// ```json
/// {
///   "otp": "123456"
/// }
/// ```
#[no_mangle]
pub extern "system" fn Java_com_otpverify_android_OtpVerify_extractOtp<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    message: JString<'local>,
    num_digits: jint,
) -> jstring {
    let result = extract_otp_internal(&mut env, message, num_digits);

    match to_jni_result(&mut env, result) {
        Some(json_str) => match to_java_string(&mut env, json_str) {
            Ok(jstr) => jstr,
            Err(_) => std::ptr::null_mut(),
        },
        None => std::ptr::null_mut(),
    }
}

fn extract_otp_internal(
    env: &mut JNIEnv,
    message: JString,
    num_digits: jint,
) -> Result<String, OtpVerifyAndroidError> {
    let body: String = env
        .get_string(&message)
        .map_err(|e| OtpVerifyAndroidError::JniError(format!("Failed to get message: {}", e)))?
        .into();

    let digits = usize::try_from(num_digits).map_err(|_| {
        OtpVerifyAndroidError::InvalidParameter(format!("numDigits must be non-negative, got {}", num_digits))
    })?;

    otp_response(&body, digits)
}

/// Build the `getSignatureHashes` JSON response from extracted strings
fn hashes_response(package: &str, certificates_json: &str) -> Result<String, OtpVerifyAndroidError> {
    let certificates: Vec<String> = serde_json::from_str(certificates_json)?;

    let hashes: Vec<String> = certificates
        .iter()
        .map(|chars| signature_hash(package, chars).into_string())
        .collect();

    let response = json!({
        "hashes": hashes
    });

    Ok(response.to_string())
}

/// Build the `extractOtp` JSON response
fn otp_response(message: &str, num_digits: usize) -> Result<String, OtpVerifyAndroidError> {
    let response = json!({
        "otp": extract_otp(message, num_digits)
    });

    Ok(response.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashes_response() {
        let response = hashes_response("com.example.app", r#"["ABCD1234"]"#).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&response).unwrap();

        assert_eq!(parsed["hashes"][0], "V1X75mBB74i");
        assert_eq!(parsed["hashes"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_hashes_response_preserves_order() {
        let response =
            hashes_response("com.asgar.otpverify", r#"["abcd1234", "0f00ba44"]"#).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&response).unwrap();

        assert_eq!(parsed["hashes"][0], "IEtqEPRE9/1");
        assert_eq!(parsed["hashes"][1], "e/8Ipr/XrtT");
    }

    #[test]
    fn test_hashes_response_empty_list() {
        let response = hashes_response("com.example.app", "[]").unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&response).unwrap();

        assert!(parsed["hashes"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_hashes_response_rejects_malformed_json() {
        let result = hashes_response("com.example.app", "not json");
        assert!(matches!(
            result,
            Err(OtpVerifyAndroidError::SerializationError(_))
        ));
    }

    #[test]
    fn test_otp_response() {
        let response = otp_response("<#> Your OTP is 123456 L1lD8GP/5Eo", 6).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&response).unwrap();
        assert_eq!(parsed["otp"], "123456");
    }

    #[test]
    fn test_otp_response_without_code() {
        let response = otp_response("no code here", 6).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&response).unwrap();
        assert!(parsed["otp"].is_null());
    }
}
